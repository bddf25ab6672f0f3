use common::config::Validate;
use common::games::snake::{SnakeSessionSettings, WallCollisionMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct SnakeGameConfig {
    pub rows: u32,
    pub cols: u32,
    pub initial_length: u32,
    pub wall_collision_mode: WallCollisionMode,
    /// Ticks per second at level 1.
    pub base_speed: u32,
    pub speed_per_level: u32,
    pub max_speed: u32,
    pub points_per_level: u32,
    pub high_score_capacity: u32,
}

impl Validate for SnakeGameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.rows) {
            return Err(format!("rows must be between 5 and 100, got {}", self.rows));
        }
        if !(5..=100).contains(&self.cols) {
            return Err(format!("cols must be between 5 and 100, got {}", self.cols));
        }
        if self.initial_length < 1 || self.initial_length > self.cols / 2 + 1 {
            return Err(format!(
                "initial_length must be between 1 and {}, got {}",
                self.cols / 2 + 1,
                self.initial_length
            ));
        }
        if !(1..=60).contains(&self.base_speed) || !(1..=60).contains(&self.max_speed) {
            return Err("base_speed and max_speed must be between 1 and 60".to_string());
        }
        if self.base_speed > self.max_speed {
            return Err(format!(
                "base_speed {} must not exceed max_speed {}",
                self.base_speed, self.max_speed
            ));
        }
        if self.points_per_level < 1 {
            return Err("points_per_level must be at least 1".to_string());
        }
        if self.high_score_capacity < 1 {
            return Err("high_score_capacity must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeGameConfig {
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

impl From<&SnakeGameConfig> for SnakeSessionSettings {
    fn from(cfg: &SnakeGameConfig) -> Self {
        Self {
            rows: cfg.rows as usize,
            cols: cfg.cols as usize,
            initial_length: cfg.initial_length as usize,
            wall_collision_mode: cfg.wall_collision_mode,
            base_speed: cfg.base_speed,
            speed_per_level: cfg.speed_per_level,
            max_speed: cfg.max_speed,
            points_per_level: cfg.points_per_level,
            high_score_capacity: cfg.high_score_capacity as usize,
        }
    }
}
