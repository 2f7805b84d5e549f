//! Animated menu renderer
//!
//! Each render clears the screen, shows the boxed banner with a simulated
//! "connecting" animation, clears again and draws the option list and prompt.
//! Nothing is carried between renders; only the terminal width changes the
//! layout.

use crate::error::Result;
use crate::render::ui::layout::{centered_offset, display_width};
use crate::render::ui::style::write_styled;
use crate::render::ui::{MenuTheme, Renderer};
use ratatui::crossterm::{
    cursor::{MoveTo, MoveToColumn},
    queue,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

pub const BANNER: [&str; 5] = [
    "╔══════════════════════════════════════════════╗",
    "║                                              ║",
    "║           MATCHER // GAME TERMINAL           ║",
    "║                                              ║",
    "╚══════════════════════════════════════════════╝",
];

pub const CONNECTING_MESSAGE: &str = "Connecting to matchmaking server";

pub const HEADER: &str = "======================== MATCHMAKING CLIENT ========================";

pub const MENU_ITEMS: [&str; 3] = [
    "  [1]  🎮  Join Game",
    "  [2]  📡  Check Status",
    "  [3]  🚪  Exit",
];

pub const PROMPT: &str = "Select option ▶ ";

/// Width used when the terminal cannot report its size (e.g. output is piped).
pub const FALLBACK_WIDTH: u16 = 80;

const CHAR_DELAY_MS: u64 = 30;
const DOT_DELAY_MS: u64 = 400;
const DOT_COUNT: usize = 10;

/// Pacing of the connecting animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// Pause after each character of the connecting message
    pub char_delay: Duration,
    /// Pause before each dot
    pub dot_delay: Duration,
    pub dot_count: usize,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(CHAR_DELAY_MS),
            dot_delay: Duration::from_millis(DOT_DELAY_MS),
            dot_count: DOT_COUNT,
        }
    }
}

impl AnimationTiming {
    /// Same frames as the default timing, without any pauses.
    pub fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
            dot_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Menu renderer writing terminal control sequences to `W`
pub struct MenuRenderer<W: Write> {
    out: W,
    theme: MenuTheme,
    timing: AnimationTiming,
    fixed_width: Option<u16>,
}

impl MenuRenderer<Stdout> {
    /// Renderer for the process's standard output
    pub fn stdout(theme: MenuTheme) -> Self {
        Self::new(io::stdout(), theme)
    }
}

impl<W: Write> MenuRenderer<W> {
    pub fn new(out: W, theme: MenuTheme) -> Self {
        Self {
            out,
            theme,
            timing: AnimationTiming::default(),
            fixed_width: None,
        }
    }

    pub fn with_timing(mut self, timing: AnimationTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Lay out against `width` instead of querying the terminal
    pub fn with_fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Clear the screen and draw the centered banner followed by a blank line.
    pub fn draw_banner(&mut self, width: u16) -> io::Result<()> {
        clear_screen(&mut self.out)?;
        write_styled(&mut self.out, self.theme.banner, |out| {
            for line in BANNER {
                write_centered(out, line, width)?;
            }
            Ok(())
        })?;
        writeln!(self.out)
    }

    /// Type out the connecting message one character at a time, then the dots.
    pub fn play_connecting_animation(&mut self) -> io::Result<()> {
        let char_delay = self.timing.char_delay;
        write_styled(&mut self.out, self.theme.connecting, |out| {
            for c in CONNECTING_MESSAGE.chars() {
                write!(out, "{c}")?;
                out.flush()?;
                pause(char_delay);
            }
            Ok(())
        })?;

        for _ in 0..self.timing.dot_count {
            pause(self.timing.dot_delay);
            write!(self.out, ".")?;
            self.out.flush()?;
        }
        writeln!(self.out)
    }

    /// Clear the screen and draw the header, the options and the prompt.
    pub fn draw_menu(&mut self, width: u16) -> io::Result<()> {
        clear_screen(&mut self.out)?;
        write_styled(&mut self.out, self.theme.header, |out| {
            write_centered(out, HEADER, width)
        })?;
        writeln!(self.out)?;

        for item in MENU_ITEMS {
            writeln!(self.out, "{item}")?;
        }
        writeln!(self.out)?;

        write_styled(&mut self.out, self.theme.prompt, |out| write!(out, "{PROMPT}"))?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for MenuRenderer<W> {
    fn render(&mut self) -> Result<()> {
        let width = self.terminal_width()?;
        self.draw_banner(width)?;
        self.play_connecting_animation()?;
        self.draw_menu(width)?;
        Ok(())
    }

    fn terminal_width(&self) -> Result<u16> {
        if let Some(width) = self.fixed_width {
            return Ok(width);
        }

        match terminal::size() {
            Ok((cols, _)) if cols > 0 => Ok(cols),
            Ok(_) => Ok(FALLBACK_WIDTH),
            Err(err) => {
                log::debug!("Terminal size unavailable ({err}), using {FALLBACK_WIDTH} columns");
                Ok(FALLBACK_WIDTH)
            }
        }
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Move to the column that centers `text`, write it and end the line.
fn write_centered<W: Write>(out: &mut W, text: &str, width: u16) -> io::Result<()> {
    let column = centered_offset(width, display_width(text));
    queue!(out, MoveToColumn(column))?;
    writeln!(out, "{text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::style::{Color, ResetColor, SetForegroundColor};
    use ratatui::crossterm::Command;

    fn sequence(command: impl Command) -> Vec<u8> {
        let mut buf = Vec::new();
        queue!(buf, command).unwrap();
        buf
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|window| *window == needle)
            .count()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        count(haystack, needle) > 0
    }

    fn renderer(width: u16, theme: MenuTheme) -> MenuRenderer<Vec<u8>> {
        MenuRenderer::new(Vec::new(), theme)
            .with_timing(AnimationTiming::instant())
            .with_fixed_width(width)
    }

    fn render_once(width: u16, theme: MenuTheme) -> Vec<u8> {
        let mut renderer = renderer(width, theme);
        renderer.render().unwrap();
        renderer.into_writer()
    }

    #[test]
    fn consecutive_renders_are_identical() {
        let mut renderer = renderer(80, MenuTheme::default());

        renderer.render().unwrap();
        let first = std::mem::take(renderer.writer_mut());
        renderer.render().unwrap();
        let second = std::mem::take(renderer.writer_mut());

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn banner_and_header_are_centered() {
        let output = render_once(80, MenuTheme::default());

        let mut banner_line = sequence(MoveToColumn(16));
        banner_line.extend_from_slice(BANNER[2].as_bytes());
        assert!(contains(&output, &banner_line));

        let mut header_line = sequence(MoveToColumn(6));
        header_line.extend_from_slice(HEADER.as_bytes());
        assert!(contains(&output, &header_line));
    }

    #[test]
    fn narrow_terminal_starts_lines_at_column_zero_untruncated() {
        let output = render_once(20, MenuTheme::default());

        let mut header_line = sequence(MoveToColumn(0));
        header_line.extend_from_slice(HEADER.as_bytes());
        assert!(contains(&output, &header_line));
        for line in BANNER {
            assert!(contains(&output, line.as_bytes()));
        }
    }

    #[test]
    fn frame_contains_menu_content_in_order() {
        let output = render_once(80, MenuTheme::monochrome());
        let text = String::from_utf8(output).unwrap();

        let positions: Vec<usize> = [
            BANNER[0],
            CONNECTING_MESSAGE,
            "..........\n",
            HEADER,
            MENU_ITEMS[0],
            MENU_ITEMS[1],
            MENU_ITEMS[2],
            PROMPT,
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle:?}")))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(text.ends_with(PROMPT));
    }

    #[test]
    fn screen_is_cleared_twice_per_render() {
        let output = render_once(80, MenuTheme::default());
        let clear = sequence(Clear(ClearType::All));
        assert_eq!(count(&output, &clear), 2);
    }

    #[test]
    fn every_color_change_is_reset() {
        let output = render_once(80, MenuTheme::default());

        let theme = MenuTheme::default();
        let colors = [theme.banner, theme.connecting, theme.header, theme.prompt];
        for color in colors.into_iter().flatten() {
            assert_eq!(count(&output, &sequence(SetForegroundColor(color))), 1);
        }
        assert_eq!(count(&output, &sequence(ResetColor)), 4);
        assert!(output.ends_with(&sequence(ResetColor)));
    }

    #[test]
    fn monochrome_theme_emits_no_color_sequences() {
        let output = render_once(80, MenuTheme::monochrome());

        assert!(!contains(&output, &sequence(SetForegroundColor(Color::Cyan))));
        assert!(!contains(&output, &sequence(ResetColor)));
    }

    #[test]
    fn dot_count_follows_timing() {
        let mut renderer = MenuRenderer::new(Vec::new(), MenuTheme::monochrome()).with_timing(
            AnimationTiming {
                dot_count: 3,
                ..AnimationTiming::instant()
            },
        );
        renderer.play_connecting_animation().unwrap();

        let text = String::from_utf8(renderer.into_writer()).unwrap();
        assert_eq!(text, format!("{CONNECTING_MESSAGE}...\n"));
    }

    #[test]
    fn fixed_width_overrides_terminal_query() {
        let renderer = renderer(132, MenuTheme::default());
        assert_eq!(renderer.terminal_width().unwrap(), 132);
    }
}
