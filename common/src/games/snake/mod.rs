mod board;
mod entity;
mod game_state;
mod high_scores;
mod session;
mod settings;
mod snapshot;
mod types;

pub use board::Board;
pub use entity::Snake;
pub use game_state::SnakeGameState;
pub use high_scores::{HighScores, ScoreEntry};
pub use session::{SessionCommand, SessionSummary, SnakeSession, SnakeSessionState};
pub use settings::SnakeSessionSettings;
pub use snapshot::GameSnapshot;
pub use types::{Cell, Direction, GameEndReason, GamePhase, MoveOutcome, WallCollisionMode};
