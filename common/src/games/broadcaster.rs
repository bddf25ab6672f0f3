use std::future::Future;

use super::snake::{GameEndReason, GameSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    pub level: u32,
    pub reason: GameEndReason,
    /// 1-based place in the high score table, if it made it.
    pub rank: Option<usize>,
}

/// Receives engine output. Implementations must not block: store the value
/// and schedule a redraw.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, result: GameResult) -> impl Future<Output = ()> + Send;
}
