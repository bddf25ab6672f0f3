mod snake;

pub use snake::{HEADER_HEIGHT, SnakeGameUi};
