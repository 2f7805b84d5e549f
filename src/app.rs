//! Application bootstrap and host lifecycle
//!
//! `Application` builds the process-wide dependencies once (configuration,
//! player state, theme and the cancellation token), starts the session loop on
//! its own thread and then supervises the token until shutdown.

pub mod runtime;

use crate::config::ClientConfig;
use crate::error::{MatcherError, Result};
use crate::input::{LineSource, StdinLines};
use crate::player::PlayerState;
use crate::render::ui::{MenuRenderer, MenuTheme, Renderer};
use crate::session::{SessionEnd, SessionLoop};
use runtime::{spawn_session_thread, supervise};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

/// Host-side handle on the detached session worker
pub struct SessionHandle {
    done: oneshot::Receiver<Result<SessionEnd>>,
}

impl SessionHandle {
    /// Collect the worker's outcome without waiting for it.
    ///
    /// Returns `Ok(None)` when the worker is still blocked on input; it is left
    /// detached and ends with the process.
    pub fn finish(mut self) -> Result<Option<SessionEnd>> {
        match self.done.try_recv() {
            Ok(outcome) => outcome.map(Some),
            Err(TryRecvError::Empty) => {
                log::warn!("Session loop still waiting for input; exiting without it");
                Ok(None)
            }
            Err(TryRecvError::Closed) => Err(MatcherError::session(
                "session thread ended without reporting an outcome",
            )),
        }
    }
}

/// Application orchestrator - wires components and owns the shutdown signal
pub struct Application {
    config: ClientConfig,
    player: PlayerState,
    theme: MenuTheme,
    cancel: CancellationToken,
}

impl Application {
    /// Validate the configuration and create the player record.
    pub fn new(config: ClientConfig, theme: MenuTheme) -> Result<Self> {
        config.validate()?;
        let player = PlayerState::new(config.player_id.clone(), config.room_id.clone())?;
        log::info!(
            "Player {} starting in room {}",
            player.player_id,
            player.current_room_id
        );

        Ok(Self {
            config,
            player,
            theme,
            cancel: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Token shared by the host, the supervisor and the session loop.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Launch `session` concurrently and return at once.
    pub fn start_session<R, L>(&self, session: SessionLoop<R, L>) -> Result<SessionHandle>
    where
        R: Renderer + Send + 'static,
        L: LineSource + Send + 'static,
    {
        let done =
            spawn_session_thread(session, self.cancel.clone(), self.config.startup_delay())?;
        Ok(SessionHandle { done })
    }

    /// Supervise the cancellation token until shutdown, then collect the
    /// session outcome if the worker has already finished.
    pub async fn run_until_cancelled(&self, handle: SessionHandle) -> Result<Option<SessionEnd>> {
        supervise(self.cancel.clone(), self.config.poll_interval()).await;
        handle.finish()
    }

    /// Run the interactive client on the process's terminal.
    ///
    /// Ctrl-C cancels the shared token.
    pub async fn run(self) -> Result<()> {
        let renderer = MenuRenderer::stdout(self.theme);
        let session = SessionLoop::new(renderer, StdinLines::new());
        let handle = self.start_session(session)?;

        let ctrl_c = self.cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Interrupt received, shutting down");
                ctrl_c.cancel();
            }
        });

        let end = self.run_until_cancelled(handle).await?;
        log::info!("Host stopped (session: {end:?})");
        Ok(())
    }
}
