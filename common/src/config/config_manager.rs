use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it and caches the result.
///
/// When the provider has no content the config's `Default` is returned and nothing is cached,
/// so a config written later by another process is still picked up.
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
            .map_err(|e| format!("Config lock poisoned: {}", e))?;

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
            .map_err(|e| format!("Config lock poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct PacingConfig {
        delay_ms: u32,
    }

    impl Default for PacingConfig {
        fn default() -> Self {
            Self { delay_ms: 500 }
        }
    }

    impl Validate for PacingConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 5000 {
                return Err("delay_ms must not exceed 5000".to_string());
            }
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryContentConfigProvider, PacingConfig> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_returns_default() {
        assert_eq!(manager(None).get_config(), Ok(PacingConfig::default()));
    }

    #[test]
    fn test_content_is_parsed() {
        assert_eq!(
            manager(Some("delay_ms: 20\n")).get_config(),
            Ok(PacingConfig { delay_ms: 20 })
        );
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let result = manager(Some("delay_ms: 9000\n")).get_config();
        assert!(result.unwrap_err().starts_with("Config validation error"));

        let result = manager(Some("delay: [1, 2")).get_config();
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }

    #[test]
    fn test_set_config_validates_before_writing() {
        let manager = manager(None);
        assert!(manager.set_config(&PacingConfig { delay_ms: 9000 }).is_err());
        assert_eq!(manager.config_content_provider.get_config_content(), Ok(None));

        manager.set_config(&PacingConfig { delay_ms: 0 }).unwrap();
        assert_eq!(manager.get_config(), Ok(PacingConfig { delay_ms: 0 }));
    }
}
