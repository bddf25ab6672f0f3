use super::types::{Cell, GameEndReason, GamePhase};

/// Read-only copy of everything a renderer needs after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub level: u32,
    pub tick: u64,
    pub phase: GamePhase,
    pub end_reason: Option<GameEndReason>,
    pub best_score: Option<u32>,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}
