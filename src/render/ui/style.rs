//! Scoped foreground styling.
//!
//! Every colored write goes through [`write_styled`], so the color set for a
//! write never leaks into the next one.

use ratatui::crossterm::{
    queue,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Run `write` with `color` as the foreground, then reset the color.
///
/// The reset is queued even if `write` fails; the first error is returned.
/// With `color == None` the writes go out unstyled and nothing is reset.
pub fn write_styled<W, F>(out: &mut W, color: Option<Color>, write: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    let Some(color) = color else {
        return write(out);
    };

    queue!(out, SetForegroundColor(color))?;
    let written = write(out);
    let reset = queue!(out, ResetColor);
    written.and(reset)
}
