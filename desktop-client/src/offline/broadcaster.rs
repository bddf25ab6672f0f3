use common::games::snake::GameSnapshot;
use common::games::{GameBroadcaster, GameResult};
use common::log;
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
        self.shared_state.request_repaint();
    }

    async fn broadcast_game_over(&self, result: GameResult) {
        match result.rank {
            Some(rank) => log!(
                "Final score {} (level {}), #{} in the high score table",
                result.score,
                result.level,
                rank
            ),
            None => log!("Final score {} (level {})", result.score, result.level),
        }
        self.shared_state.set_last_result(result);
        self.shared_state.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{Cell, GameEndReason, GamePhase};

    fn snapshot(tick: u64) -> GameSnapshot {
        GameSnapshot {
            rows: 5,
            cols: 5,
            snake: vec![Cell::new(2, 2)],
            food: Some(Cell::new(0, 0)),
            score: 0,
            level: 1,
            tick,
            phase: GamePhase::Running,
            end_reason: None,
            best_score: None,
        }
    }

    #[tokio::test]
    async fn test_latest_snapshot_replaces_previous() {
        let shared_state = SharedState::new();
        let broadcaster = LocalBroadcaster::new(shared_state.clone());

        broadcaster.broadcast_state(snapshot(1)).await;
        broadcaster.broadcast_state(snapshot(2)).await;

        assert_eq!(shared_state.get_snapshot().unwrap().tick, 2);
    }

    #[tokio::test]
    async fn test_game_over_is_stored() {
        let shared_state = SharedState::new();
        let broadcaster = LocalBroadcaster::new(shared_state.clone());
        let result = GameResult {
            score: 9,
            level: 2,
            reason: GameEndReason::SelfCollision,
            rank: Some(1),
        };

        broadcaster.broadcast_game_over(result).await;

        assert_eq!(shared_state.get_last_result(), Some(result));
    }
}
