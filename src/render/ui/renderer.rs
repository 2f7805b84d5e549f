//! Renderer trait
//!
//! This module defines the `Renderer` trait, the seam between the session loop
//! and whatever draws the menu.

use crate::error::Result;

/// Core trait for drawing the menu
pub trait Renderer {
    /// Draw one complete menu frame, ending at the input prompt
    ///
    /// This method should:
    /// - Clear the screen before drawing
    /// - Produce the same structure on every call
    /// - Leave the terminal's foreground color at its default
    fn render(&mut self) -> Result<()>;

    /// Get current terminal width in columns
    fn terminal_width(&self) -> Result<u16>;
}
