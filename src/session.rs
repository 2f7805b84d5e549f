//! Interactive session loop.
//!
//! Renders the menu, blocks for one line of input and evaluates it, until the
//! user exits or the shared cancellation token is observed at the top of an
//! iteration. Cancellation never interrupts a pending read: a token cancelled
//! while the loop waits for input is only noticed after the next line arrives.

use crate::error::Result;
use crate::input::{LineSource, MenuChoice};
use crate::render::ui::Renderer;
use log::{debug, info};
use tokio_util::sync::CancellationToken;

/// Why a session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered `3` or `exit`
    UserExit,
    /// The cancellation token was set before an iteration began
    Cancelled,
    /// Standard input reached end of file
    InputClosed,
}

/// Read/render/evaluate cycle over a renderer and a line source.
pub struct SessionLoop<R, L> {
    renderer: R,
    input: L,
}

impl<R: Renderer, L: LineSource> SessionLoop<R, L> {
    pub fn new(renderer: R, input: L) -> Self {
        Self { renderer, input }
    }

    /// Run until exit, blocking the calling thread.
    ///
    /// Terminal I/O failures end the loop with an error.
    pub fn run(&mut self, cancel: &CancellationToken) -> Result<SessionEnd> {
        loop {
            if cancel.is_cancelled() {
                info!("Cancellation observed, leaving session loop");
                return Ok(SessionEnd::Cancelled);
            }

            self.renderer.render()?;

            let Some(line) = self.input.read_line()? else {
                info!("Console input closed, leaving session loop");
                return Ok(SessionEnd::InputClosed);
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Exit => {
                    info!("Exit requested from menu");
                    return Ok(SessionEnd::UserExit);
                }
                // TODO: dispatch to matchmaking once a transport exists
                choice @ (MenuChoice::JoinGame | MenuChoice::CheckStatus) => {
                    debug!("{choice:?} selected; no action available yet");
                }
                MenuChoice::Unrecognized => {
                    debug!("Ignoring unrecognized input {line:?}");
                }
            }
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::BufReadLines;
    use crate::render::ui::MockRenderer;
    use std::io::Cursor;

    fn session(script: &str) -> SessionLoop<MockRenderer, BufReadLines<Cursor<String>>> {
        SessionLoop::new(
            MockRenderer::new(),
            BufReadLines::new(Cursor::new(script.to_string())),
        )
    }

    #[test]
    fn status_then_exit_renders_twice() {
        let mut session = session("2\n3\n");
        let end = session.run(&CancellationToken::new()).unwrap();

        assert_eq!(end, SessionEnd::UserExit);
        assert_eq!(session.renderer().render_count, 2);
    }

    #[test]
    fn exit_words_end_the_session_immediately() {
        for script in ["3\n", "exit\n", "EXIT\n", "ExIt\n", "  exit \n"] {
            let mut session = session(script);
            let end = session.run(&CancellationToken::new()).unwrap();

            assert_eq!(end, SessionEnd::UserExit, "{script:?}");
            assert_eq!(session.renderer().render_count, 1);
        }
    }

    #[test]
    fn non_exit_inputs_keep_the_loop_running() {
        let mut session = session("1\n2\n\nfoo\n4\nexit please\n3\n");
        let end = session.run(&CancellationToken::new()).unwrap();

        assert_eq!(end, SessionEnd::UserExit);
        assert_eq!(session.renderer().render_count, 7);
    }

    #[test]
    fn empty_line_is_ignored() {
        let mut session = session("\n3\n");
        session.run(&CancellationToken::new()).unwrap();
        assert_eq!(session.renderer().render_count, 2);
    }

    #[test]
    fn non_utf8_line_is_ignored() {
        let mut session = SessionLoop::new(
            MockRenderer::new(),
            BufReadLines::new(Cursor::new(b"caf\xe9\n3\n".to_vec())),
        );
        let end = session.run(&CancellationToken::new()).unwrap();

        assert_eq!(end, SessionEnd::UserExit);
        assert_eq!(session.renderer().render_count, 2);
    }

    #[test]
    fn cancelled_token_stops_before_rendering() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut session = session("1\n");
        let end = session.run(&cancel).unwrap();

        assert_eq!(end, SessionEnd::Cancelled);
        assert_eq!(session.renderer().render_count, 0);
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut session = session("1\n");
        let end = session.run(&CancellationToken::new()).unwrap();

        assert_eq!(end, SessionEnd::InputClosed);
        assert_eq!(session.renderer().render_count, 2);
    }

    #[test]
    fn cancellation_is_checked_only_at_loop_top() {
        struct CancelOnRead {
            cancel: CancellationToken,
        }

        impl LineSource for CancelOnRead {
            fn read_line(&mut self) -> Result<Option<String>> {
                // the token fires while this read is in flight
                self.cancel.cancel();
                Ok(Some("1".to_string()))
            }
        }

        let cancel = CancellationToken::new();
        let mut session = SessionLoop::new(
            MockRenderer::new(),
            CancelOnRead {
                cancel: cancel.clone(),
            },
        );
        let end = session.run(&cancel).unwrap();

        assert_eq!(end, SessionEnd::Cancelled);
        assert_eq!(session.renderer().render_count, 1);
    }

    #[test]
    fn terminal_errors_propagate() {
        struct BrokenConsole;

        impl LineSource for BrokenConsole {
            fn read_line(&mut self) -> Result<Option<String>> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
            }
        }

        let mut session = SessionLoop::new(MockRenderer::new(), BrokenConsole);
        assert!(session.run(&CancellationToken::new()).is_err());
    }
}
