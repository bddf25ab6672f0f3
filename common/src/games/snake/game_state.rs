use std::time::Duration;

use crate::error::{EngineError, EngineResult};
use crate::games::SessionRng;
use crate::{debug, log};
use super::board::Board;
use super::entity::Snake;
use super::settings::SnakeSessionSettings;
use super::snapshot::GameSnapshot;
use super::types::{Cell, Direction, GameEndReason, GamePhase, MoveOutcome};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    board: Board,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    level: u32,
    tick: u64,
    phase: GamePhase,
    end_reason: Option<GameEndReason>,
    settings: SnakeSessionSettings,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSessionSettings, rng: &mut SessionRng) -> EngineResult<Self> {
        settings.validate()?;

        let board = Board::new(settings.rows, settings.cols, settings.wall_collision_mode)?;
        let snake = Snake::new(
            settings.start_position(),
            Direction::Right,
            settings.initial_length,
            &board,
        )?;
        let food = board.random_empty_cell(snake.occupied(), rng);

        let mut state = Self::from_parts(board, snake, food, settings);
        if food.is_none() {
            state.finish(GameEndReason::BoardFilled);
        }
        Ok(state)
    }

    /// Builds a game from an explicit layout.
    pub fn with_layout(
        settings: SnakeSessionSettings,
        board: Board,
        snake: Snake,
        food: Cell,
    ) -> EngineResult<Self> {
        if let Some(outside) = snake.cells().find(|c| !board.is_inside(*c)) {
            return Err(EngineError::CellOutsideBoard(outside));
        }
        if !board.is_inside(food) {
            return Err(EngineError::CellOutsideBoard(food));
        }
        if snake.contains(&food) {
            return Err(EngineError::FoodOnSnake(food));
        }

        Ok(Self::from_parts(board, snake, Some(food), settings))
    }

    fn from_parts(board: Board, snake: Snake, food: Option<Cell>, settings: SnakeSessionSettings) -> Self {
        Self {
            board,
            snake,
            food,
            score: 0,
            level: 1,
            tick: 0,
            phase: GamePhase::Running,
            end_reason: None,
            settings,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn tick_interval(&self) -> Duration {
        self.settings.tick_interval(self.level)
    }

    /// Turns only register while the game is running.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.snake.set_direction(direction)
    }

    /// One simulation step. `None` when the game is not running.
    pub fn tick(&mut self, rng: &mut SessionRng) -> Option<MoveOutcome> {
        if self.phase != GamePhase::Running {
            return None;
        }

        self.tick += 1;
        let outcome = self.snake.advance(&self.board, self.food);

        match outcome {
            MoveOutcome::Moved => {}
            MoveOutcome::Ate => self.on_food_eaten(rng),
            MoveOutcome::CollidedWall => self.finish(GameEndReason::WallCollision),
            MoveOutcome::CollidedSelf => self.finish(GameEndReason::SelfCollision),
        }

        Some(outcome)
    }

    fn on_food_eaten(&mut self, rng: &mut SessionRng) {
        self.score += 1;
        debug!("Ate food at {}. Score: {}", self.snake.head(), self.score);

        let level = self.settings.level_for_score(self.score);
        if level != self.level {
            self.level = level;
            log!(
                "Reached level {} ({} ticks/s)",
                level,
                self.settings.speed_for_level(level)
            );
        }

        self.food = self.board.random_empty_cell(self.snake.occupied(), rng);
        if self.food.is_none() {
            self.finish(GameEndReason::BoardFilled);
        }
    }

    fn finish(&mut self, reason: GameEndReason) {
        self.phase = GamePhase::GameOver;
        self.end_reason = Some(reason);
        log!(
            "Game over: snake {} at tick {}. Score: {}, level: {}",
            reason,
            self.tick,
            self.score,
            self.level
        );
    }

    /// Running <-> Paused. Returns `false` once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => return false,
        };
        debug!("Phase changed to {:?}", self.phase);
        true
    }

    /// Starts a fresh game. Only allowed after game over.
    pub fn restart(&mut self, rng: &mut SessionRng) -> EngineResult<bool> {
        if self.phase != GamePhase::GameOver {
            return Ok(false);
        }
        *self = Self::new(self.settings.clone(), rng)?;
        log!("New game started");
        Ok(true)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            level: self.level,
            tick: self.tick,
            phase: self.phase,
            end_reason: self.end_reason,
            best_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::WallCollisionMode;

    fn settings_5x5() -> SnakeSessionSettings {
        SnakeSessionSettings {
            rows: 5,
            cols: 5,
            initial_length: 1,
            ..SnakeSessionSettings::default()
        }
    }

    fn create_state(snake_cells: Vec<Cell>, direction: Direction, food: Cell) -> SnakeGameState {
        let board = Board::new(5, 5, WallCollisionMode::Death).unwrap();
        let snake = Snake::from_cells(snake_cells, direction).unwrap();
        SnakeGameState::with_layout(settings_5x5(), board, snake, food).unwrap()
    }

    #[test]
    fn test_eating_grows_and_relocates_food() {
        let mut state = create_state(vec![Cell::new(2, 2)], Direction::Right, Cell::new(2, 3));
        let mut rng = SessionRng::new(42);

        let outcome = state.tick(&mut rng);

        assert_eq!(outcome, Some(MoveOutcome::Ate));
        let cells: Vec<Cell> = state.snake().cells().collect();
        assert_eq!(cells, vec![Cell::new(2, 3), Cell::new(2, 2)]);
        assert_eq!(state.score(), 1);
        let food = state.food().unwrap();
        assert!(food != Cell::new(2, 3) && food != Cell::new(2, 2));
        assert!(state.board().is_inside(food));
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut state = create_state(vec![Cell::new(0, 0)], Direction::Up, Cell::new(4, 4));
        let mut rng = SessionRng::new(1);

        assert_eq!(state.tick(&mut rng), Some(MoveOutcome::CollidedWall));
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.end_reason(), Some(GameEndReason::WallCollision));
    }

    #[test]
    fn test_no_ticks_after_game_over() {
        let mut state = create_state(vec![Cell::new(0, 0)], Direction::Up, Cell::new(4, 4));
        let mut rng = SessionRng::new(1);
        state.tick(&mut rng);

        assert_eq!(state.tick(&mut rng), None);
        assert_eq!(state.tick_count(), 1);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let body = vec![
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 2),
            Cell::new(2, 1),
            Cell::new(2, 0),
        ];
        let mut state = create_state(body, Direction::Left, Cell::new(4, 4));
        let mut rng = SessionRng::new(1);
        state.set_direction(Direction::Down);

        assert_eq!(state.tick(&mut rng), Some(MoveOutcome::CollidedSelf));
        assert_eq!(state.end_reason(), Some(GameEndReason::SelfCollision));
    }

    #[test]
    fn test_pause_blocks_ticks_and_turns() {
        let mut state = create_state(vec![Cell::new(2, 2)], Direction::Right, Cell::new(0, 0));
        let mut rng = SessionRng::new(1);

        assert!(state.toggle_pause());
        assert_eq!(state.phase(), GamePhase::Paused);
        assert_eq!(state.tick(&mut rng), None);
        assert!(!state.set_direction(Direction::Up));
        assert_eq!(state.snake().head(), Cell::new(2, 2));

        assert!(state.toggle_pause());
        assert_eq!(state.tick(&mut rng), Some(MoveOutcome::Moved));
        assert_eq!(state.snake().head(), Cell::new(2, 3));
    }

    #[test]
    fn test_pause_toggle_ignored_after_game_over() {
        let mut state = create_state(vec![Cell::new(0, 0)], Direction::Up, Cell::new(4, 4));
        let mut rng = SessionRng::new(1);
        state.tick(&mut rng);

        assert!(!state.toggle_pause());
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut state = create_state(vec![Cell::new(0, 0)], Direction::Up, Cell::new(4, 4));
        let mut rng = SessionRng::new(3);

        assert!(!state.restart(&mut rng).unwrap());

        state.tick(&mut rng);
        assert!(state.restart(&mut rng).unwrap());
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().direction(), Direction::Right);
    }

    #[test]
    fn test_layout_rejects_food_on_snake() {
        let board = Board::new(5, 5, WallCollisionMode::Death).unwrap();
        let snake = Snake::from_cells(vec![Cell::new(1, 1)], Direction::Up).unwrap();

        let result = SnakeGameState::with_layout(settings_5x5(), board, snake, Cell::new(1, 1));

        assert_eq!(result.unwrap_err(), EngineError::FoodOnSnake(Cell::new(1, 1)));
    }

    #[test]
    fn test_invalid_settings_fail_at_creation() {
        let settings = SnakeSessionSettings {
            cols: 0,
            ..SnakeSessionSettings::default()
        };
        let mut rng = SessionRng::new(1);

        assert!(matches!(
            SnakeGameState::new(settings, &mut rng),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_level_up_shortens_tick_interval() {
        let settings = SnakeSessionSettings {
            rows: 5,
            cols: 5,
            initial_length: 1,
            points_per_level: 1,
            ..SnakeSessionSettings::default()
        };
        let board = Board::new(5, 5, WallCollisionMode::Death).unwrap();
        let snake = Snake::from_cells(vec![Cell::new(2, 0)], Direction::Right).unwrap();
        let mut state = SnakeGameState::with_layout(settings, board, snake, Cell::new(2, 1)).unwrap();
        let mut rng = SessionRng::new(9);
        let before = state.tick_interval();

        state.tick(&mut rng);

        assert_eq!(state.level(), 2);
        assert!(state.tick_interval() < before);
    }

    #[test]
    fn test_filling_the_board_ends_game() {
        let settings = SnakeSessionSettings {
            rows: 1,
            cols: 2,
            initial_length: 1,
            ..SnakeSessionSettings::default()
        };
        let board = Board::new(1, 2, WallCollisionMode::Death).unwrap();
        let snake = Snake::from_cells(vec![Cell::new(0, 0)], Direction::Right).unwrap();
        let mut state = SnakeGameState::with_layout(settings, board, snake, Cell::new(0, 1)).unwrap();
        let mut rng = SessionRng::new(5);

        assert_eq!(state.tick(&mut rng), Some(MoveOutcome::Ate));
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.end_reason(), Some(GameEndReason::BoardFilled));
        assert_eq!(state.food(), None);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let settings = SnakeSessionSettings {
            rows: 8,
            cols: 8,
            initial_length: 3,
            wall_collision_mode: WallCollisionMode::WrapAround,
            ..SnakeSessionSettings::default()
        };
        let mut rng = SessionRng::new(2024);
        let mut state = SnakeGameState::new(settings, &mut rng).unwrap();
        let directions = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

        for _ in 0..500 {
            if state.phase() == GamePhase::GameOver {
                state.restart(&mut rng).unwrap();
            }
            let turn = directions[rng.random_range(0..directions.len())];
            let direction_before = state.snake().direction();
            state.set_direction(turn);
            if turn.is_opposite(&direction_before) {
                assert_eq!(state.snake().pending_direction(), None);
            }

            let length_before = state.snake().len();
            state.tick(&mut rng);

            assert!(state.snake().len() >= length_before);
            if let Some(food) = state.food() {
                assert!(!state.snake().contains(&food));
            }
        }
    }
}
