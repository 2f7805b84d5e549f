//! Centering arithmetic for banner and header lines.

use ratatui::text::Line;

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    Line::raw(text).width()
}

/// Column at which a line of `line_width` columns starts when centered.
///
/// Lines wider than the terminal start at column 0 and are not truncated.
pub fn centered_offset(terminal_width: u16, line_width: usize) -> u16 {
    let spare = usize::from(terminal_width).saturating_sub(line_width);
    // spare / 2 <= terminal_width / 2, so it always fits
    (spare / 2) as u16
}
