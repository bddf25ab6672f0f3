mod game;
mod window;

pub use window::create_game_window;
