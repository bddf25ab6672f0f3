use crate::games::snake::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidConfiguration(String),
    EmptySnake,
    DuplicateCell(Cell),
    CellOutsideBoard(Cell),
    FoodOnSnake(Cell),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            }
            EngineError::EmptySnake => write!(f, "Snake must have at least one cell"),
            EngineError::DuplicateCell(cell) => write!(f, "Snake occupies {} twice", cell),
            EngineError::CellOutsideBoard(cell) => write!(f, "Cell {} is outside the board", cell),
            EngineError::FoodOnSnake(cell) => write!(f, "Food at {} overlaps the snake", cell),
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;
