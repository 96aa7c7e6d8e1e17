use crate::error::{EcoError, Result};
use crate::store::fs_backend::validate_storage_key;
use crate::suggest::SuggestSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_KEY: &str = "econotes_data";

/// Configuration for econotes, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct EcoConfig {
    /// Name of the storage slot holding the notes
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Simulated analysis time of the suggestion provider, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub suggestion_delay_ms: u64,

    /// How many tasks a suggestion request may return
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Minimum content length before suggestions are offered
    #[serde(default = "default_min_content_len")]
    pub min_content_len: usize,

    /// Fixed seed for the suggestion picker; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_max_suggestions() -> usize {
    1
}

fn default_min_content_len() -> usize {
    5
}

impl Default for EcoConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            suggestion_delay_ms: default_delay_ms(),
            max_suggestions: default_max_suggestions(),
            min_content_len: default_min_content_len(),
            seed: None,
        }
    }
}

impl EcoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(EcoError::Io)?;
        let config: EcoConfig = serde_json::from_str(&content).map_err(EcoError::Serialization)?;
        validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(EcoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(EcoError::Serialization)?;
        fs::write(config_path, content).map_err(EcoError::Io)?;
        Ok(())
    }

    pub fn suggest_settings(&self) -> SuggestSettings {
        SuggestSettings {
            delay: Duration::from_millis(self.suggestion_delay_ms),
            max_suggestions: self.max_suggestions,
            min_content_len: self.min_content_len,
        }
    }

    /// Set a value by its config key (e.g. `suggestion-delay-ms`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || EcoError::Api(format!("Invalid value for {}: {}", key, value));
        match key {
            "storage-key" => {
                let key = value.trim();
                validate_storage_key(key)?;
                self.storage_key = key.to_string();
            }
            "suggestion-delay-ms" => self.suggestion_delay_ms = value.parse().map_err(|_| invalid())?,
            "max-suggestions" => self.max_suggestions = value.parse().map_err(|_| invalid())?,
            "min-content-len" => self.min_content_len = value.parse().map_err(|_| invalid())?,
            "seed" => {
                self.seed = if value == "none" {
                    None
                } else {
                    Some(value.parse().map_err(|_| invalid())?)
                }
            }
            _ => return Err(EcoError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// Current value of a config key, as text.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "storage-key" => self.storage_key.clone(),
            "suggestion-delay-ms" => self.suggestion_delay_ms.to_string(),
            "max-suggestions" => self.max_suggestions.to_string(),
            "min-content-len" => self.min_content_len.to_string(),
            "seed" => self
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string()),
            _ => return Err(EcoError::Api(format!("Unknown config key: {}", key))),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EcoConfig::default();
        assert_eq!(config.storage_key, "econotes_data");
        assert_eq!(config.suggestion_delay_ms, 1000);
        assert_eq!(config.max_suggestions, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = EcoConfig::load(dir.path()).unwrap();
        assert_eq!(config, EcoConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = EcoConfig::default();
        config.set("suggestion-delay-ms", "0").unwrap();
        config.set("seed", "99").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = EcoConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.suggestion_delay_ms, 0);
        assert_eq!(loaded.seed, Some(99));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"max-suggestions": 2}"#).unwrap();
        let config = EcoConfig::load(dir.path()).unwrap();
        assert_eq!(config.max_suggestions, 2);
        assert_eq!(config.storage_key, "econotes_data");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = EcoConfig::default();
        assert!(config.set("max-suggestions", "lots").is_err());
        assert!(config.set("colour", "green").is_err());
        assert!(config.set("storage-key", "  ").is_err());
        assert_eq!(config, EcoConfig::default());
    }

    #[test]
    fn test_storage_key_must_be_a_plain_name() {
        let mut config = EcoConfig::default();
        for key in ["a/b", ".hidden", "..\\y", "notes/eco"] {
            assert!(config.set("storage-key", key).is_err(), "accepted {:?}", key);
        }
        assert_eq!(config.storage_key, "econotes_data");

        config.set("storage-key", "garden_notes").unwrap();
        assert_eq!(config.storage_key, "garden_notes");
    }

    #[test]
    fn test_load_rejects_hand_edited_storage_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"storage-key": "../outside"}"#).unwrap();
        assert!(EcoConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_get_round_trips_set() {
        let mut config = EcoConfig::default();
        config.set("min-content-len", "12").unwrap();
        assert_eq!(config.get("min-content-len").unwrap(), "12");
        assert_eq!(config.get("seed").unwrap(), "none");
    }

    #[test]
    fn test_suggest_settings() {
        let config = EcoConfig {
            suggestion_delay_ms: 250,
            ..Default::default()
        };
        assert_eq!(
            config.suggest_settings().delay,
            Duration::from_millis(250)
        );
    }
}
