//! Color theme for the menu
//!
//! Colors are crossterm foreground colors. `None` leaves the terminal's
//! current color untouched, which is how monochrome output is produced.

use ratatui::crossterm::style::Color;

/// Foreground colors for each styled part of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTheme {
    /// Boxed title banner
    pub banner: Option<Color>,

    /// "Connecting" message typed out under the banner
    pub connecting: Option<Color>,

    /// Menu header line
    pub header: Option<Color>,

    /// Input prompt
    pub prompt: Option<Color>,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            banner: Some(Color::Cyan),
            connecting: Some(Color::DarkGrey),
            header: Some(Color::Green),
            prompt: Some(Color::Yellow),
        }
    }
}

impl MenuTheme {
    /// Create a theme that never changes the terminal color
    pub fn monochrome() -> Self {
        Self {
            banner: None,
            connecting: None,
            header: None,
            prompt: None,
        }
    }
}
