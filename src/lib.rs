//! # matcher - Matchmaking Terminal Client
//!
//! A console front end for the matcher matchmaking service. It shows an
//! animated menu, reads a numeric selection and exits on request. Joining a
//! game and checking status are placeholders that only redisplay the menu.
//!
//! ## Architecture
//!
//! - [`session`] - The interactive read/render/evaluate loop
//! - [`render::ui`](crate::render::ui) - Menu rendering, layout and styling
//! - [`input`] - Console line collection and menu choice parsing
//! - [`app`] - Bootstrap, worker thread and supervisory shutdown poll
//! - [`player`] - Passive player state record
//! - [`config`] - Client configuration
//! - [`error`] - Centralized error types

// Core modules
pub mod config;
pub mod error;
pub mod player;

// Subsystems
pub mod input;
pub mod render;

// Core components
pub mod app;
pub mod session;

// Re-export commonly used types for convenience
pub use error::{MatcherError, Result};

// Public API surface for external usage
pub use app::{Application, SessionHandle};
pub use config::ClientConfig;
pub use player::{PlayerState, PlayerStatus};
pub use session::{SessionEnd, SessionLoop};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
