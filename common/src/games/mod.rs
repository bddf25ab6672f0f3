mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::{GameBroadcaster, GameResult};
pub use session_rng::SessionRng;
