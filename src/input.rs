//! Console input subsystem.
//!
//! `line` collects raw lines from the console (or any buffered reader), and
//! `choice` turns a submitted line into the menu selection it names.

pub mod choice;
pub mod line;

// Modules outside this crate should prefer importing from `crate::input`
// rather than reaching into submodules.
pub use choice::MenuChoice;
pub use line::{BufReadLines, LineSource, StdinLines};
