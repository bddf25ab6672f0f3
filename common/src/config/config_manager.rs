use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it and caches it. A missing source yields
/// `TConfig::default()` without caching, so a later `set_config` still writes.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
        writes: RefCell<usize>,
    }

    impl ConfigContentProvider for &MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct SampleConfig {
        speed: u32,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.speed > 100 {
                return Err("speed too high".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_gives_default() {
        let provider = MemoryContentProvider::default();
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let provider = MemoryContentProvider::default();
        let manager = ConfigManager::new(&provider, YamlConfigSerializer::new());

        manager.set_config(&SampleConfig { speed: 7 }).unwrap();

        assert_eq!(manager.get_config().unwrap(), SampleConfig { speed: 7 });
        assert_eq!(*provider.writes.borrow(), 1);
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let provider = MemoryContentProvider::default();
        let manager = ConfigManager::new(&provider, YamlConfigSerializer::new());

        let result = manager.set_config(&SampleConfig { speed: 500 });

        assert!(result.is_err());
        assert_eq!(*provider.writes.borrow(), 0);
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let provider = MemoryContentProvider::default();
        *provider.content.borrow_mut() = Some("speed: 1000\n".to_string());
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        let error = manager.get_config().unwrap_err();

        assert!(error.contains("speed too high"));
    }
}
