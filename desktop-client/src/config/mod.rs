mod main_config;
mod snake_game_config;
mod window_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
pub use snake_game_config::SnakeGameConfig;
pub use window_config::WindowConfig;
