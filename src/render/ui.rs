//! Terminal rendering components.
//!
//! This module hosts the concrete menu renderer along with the layout, styling
//! and theme utilities it is built from.

pub mod layout;
pub mod menu;
pub mod renderer;
pub mod style;
pub mod theme;

pub use layout::{centered_offset, display_width};
pub use menu::{AnimationTiming, MenuRenderer};
pub use renderer::Renderer;
pub use style::write_styled;
pub use theme::MenuTheme;

#[cfg(test)]
pub use renderer::tests::MockRenderer;
