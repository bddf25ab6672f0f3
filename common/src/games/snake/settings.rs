use std::time::Duration;

use crate::error::{EngineError, EngineResult};
use super::types::{Cell, WallCollisionMode};

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub rows: usize,
    pub cols: usize,
    pub initial_length: usize,
    pub wall_collision_mode: WallCollisionMode,
    /// Ticks per second at level 1.
    pub base_speed: u32,
    pub speed_per_level: u32,
    pub max_speed: u32,
    pub points_per_level: u32,
    pub high_score_capacity: usize,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            rows: 24,
            cols: 32,
            initial_length: 3,
            wall_collision_mode: WallCollisionMode::Death,
            base_speed: 2,
            speed_per_level: 2,
            max_speed: 20,
            points_per_level: 5,
            high_score_capacity: 10,
        }
    }
}

impl SnakeSessionSettings {
    pub fn validate(&self) -> EngineResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid(format!(
                "board dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.initial_length == 0 {
            return Err(invalid("initial snake length must be at least 1".to_string()));
        }
        if self.base_speed == 0 {
            return Err(invalid("base speed must be at least 1 tick per second".to_string()));
        }
        if self.max_speed < self.base_speed {
            return Err(invalid(format!(
                "max speed {} is below base speed {}",
                self.max_speed, self.base_speed
            )));
        }
        if self.points_per_level == 0 {
            return Err(invalid("points per level must be at least 1".to_string()));
        }
        if self.high_score_capacity == 0 {
            return Err(invalid("high score capacity must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn level_for_score(&self, score: u32) -> u32 {
        1 + score / self.points_per_level.max(1)
    }

    pub fn speed_for_level(&self, level: u32) -> u32 {
        let bonus = self.speed_per_level.saturating_mul(level.saturating_sub(1));
        self.base_speed.saturating_add(bonus).min(self.max_speed).max(1)
    }

    pub fn tick_interval(&self, level: u32) -> Duration {
        Duration::from_millis(1000 / self.speed_for_level(level) as u64)
    }

    /// Head position for a fresh snake heading right: vertically centred and
    /// far enough from the left wall for the whole body.
    pub fn start_position(&self) -> Cell {
        let col = (self.initial_length.saturating_sub(1)).max(self.cols / 4);
        Cell::new(self.rows / 2, col.min(self.cols.saturating_sub(1)))
    }
}

fn invalid(reason: String) -> EngineError {
    EngineError::InvalidConfiguration(reason)
}
