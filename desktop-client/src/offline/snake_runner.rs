use common::games::snake::{SessionCommand, SessionSummary, SnakeSession, SnakeSessionState};
use common::log;
use std::thread::JoinHandle;
use tokio::sync::mpsc;

use crate::state::SharedState;
use super::LocalBroadcaster;

/// Runs the session on its own thread with a single-threaded tokio runtime.
/// The session ends when every clone of the returned sender is dropped.
pub fn spawn_snake_session(
    session_state: SnakeSessionState,
    shared_state: SharedState,
) -> std::io::Result<(
    mpsc::UnboundedSender<SessionCommand>,
    JoinHandle<Option<SessionSummary>>,
)> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let broadcaster = LocalBroadcaster::new(shared_state);

    let handle = std::thread::Builder::new()
        .name("snake-session".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    log!("Failed to start session runtime: {}", e);
                    return None;
                }
            };
            Some(runtime.block_on(SnakeSession::run(session_state, command_rx, broadcaster)))
        })?;

    Ok((command_tx, handle))
}
