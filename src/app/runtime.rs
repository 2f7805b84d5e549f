//! Worker thread and supervisory poll.

use crate::error::{MatcherError, Result};
use crate::input::LineSource;
use crate::render::ui::Renderer;
use crate::session::{SessionEnd, SessionLoop};
use std::thread;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Spawn the session loop on a dedicated OS thread.
///
/// The thread waits out `startup_delay` (cut short by cancellation), runs the loop, sends its outcome on
/// the returned channel and then cancels `cancel` so the host shuts down with
/// it. The thread is never joined: while it is blocked reading a line, process
/// exit is allowed to race it.
pub fn spawn_session_thread<R, L>(
    mut session: SessionLoop<R, L>,
    cancel: CancellationToken,
    startup_delay: Duration,
) -> Result<oneshot::Receiver<Result<SessionEnd>>>
where
    R: Renderer + Send + 'static,
    L: LineSource + Send + 'static,
{
    let (done_tx, done_rx) = oneshot::channel();

    thread::Builder::new()
        .name("session-loop".to_string())
        .spawn(move || {
            startup_pause(startup_delay, &cancel);

            let outcome = session.run(&cancel);
            match &outcome {
                Ok(end) => log::info!("Session loop ended: {end:?}"),
                Err(err) => log::error!("Session loop failed: {err}"),
            }

            // The outcome must be in place before the supervisor wakes up.
            if let Err(outcome) = done_tx.send(outcome) {
                log::debug!("Host gone before session outcome was collected: {outcome:?}");
            }
            cancel.cancel();
        })
        .map_err(|e| MatcherError::session(format!("failed to spawn session thread: {e}")))?;

    Ok(done_rx)
}

const STARTUP_SLICE: Duration = Duration::from_millis(50);

/// Sleep for up to `delay` in short slices, returning early once `cancel` fires.
fn startup_pause(delay: Duration, cancel: &CancellationToken) {
    let mut remaining = delay;
    while !remaining.is_zero() && !cancel.is_cancelled() {
        let slice = remaining.min(STARTUP_SLICE);
        thread::sleep(slice);
        remaining -= slice;
    }
}

/// Wait until `cancel` fires, waking every `poll_interval` to re-check it.
///
/// This path never touches the terminal.
pub async fn supervise(cancel: CancellationToken, poll_interval: Duration) {
    while !cancel.is_cancelled() {
        tokio::select! {
            _ = tokio::time::sleep(poll_interval) => {}
            _ = cancel.cancelled() => break,
        }
    }
    log::debug!("Supervisor observed cancellation");
}
