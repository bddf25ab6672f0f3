use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub cell_size_px: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("window title must not be empty".to_string());
        }
        if !(4..=64).contains(&self.cell_size_px) {
            return Err(format!(
                "cell_size_px must be between 4 and 64, got {}",
                self.cell_size_px
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snake Game".to_string(),
            cell_size_px: 20,
        }
    }
}
