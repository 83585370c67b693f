//! Configuration module for flashmaster
//!
//! Manages application settings such as where the learned set is stored
//! and the initial hide-learned filter. Configuration is stored in the
//! user's config directory (`~/.config/flashmaster/config.toml` on Linux)
//! and can be overridden with `FLASHMASTER_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Settings keys accepted by `flashmaster config get/set`
pub const KEYS: [&str; 4] = ["data_dir", "hide_learned", "quiet", "message_ttl_secs"];

const fn default_message_ttl_secs() -> u64 {
    3
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlashmasterConfig {
    /// Directory holding the learned-set database (defaults to the system data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Start study sessions with learned cards hidden
    #[serde(default)]
    pub hide_learned: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// How long status messages stay visible in the TUI
    #[serde(default = "default_message_ttl_secs")]
    pub message_ttl_secs: u64,
}

impl Default for FlashmasterConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            hide_learned: false,
            quiet: false,
            message_ttl_secs: default_message_ttl_secs(),
        }
    }
}

impl FlashmasterConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("flashmaster").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("FLASHMASTER"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Same as [`Self::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Directory for persistent data, falling back to the system data dir
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no data dir is configured and the system
    /// data directory cannot be determined.
    pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_local_dir()
            .map(|dir| dir.join("flashmaster"))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }

    /// Location of the learned-set database inside `data_dir`
    #[must_use]
    pub fn store_path(data_dir: &Path) -> PathBuf {
        data_dir.join("learned.db")
    }

    /// Read a setting by key, formatted for display
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `key` is not a known setting.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "data_dir" => Ok(self
                .data_dir
                .as_ref()
                .map_or_else(String::new, |d| d.display().to_string())),
            "hide_learned" => Ok(self.hide_learned.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            "message_ttl_secs" => Ok(self.message_ttl_secs.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a setting from its string form (does not save)
    ///
    /// An empty value for `data_dir` clears it back to the default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `key` is unknown or `value` does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "data_dir" => {
                self.data_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "hide_learned" => self.hide_learned = parse_bool(key, value)?,
            "quiet" => self.quiet = parse_bool(key, value)?,
            "message_ttl_secs" => {
                self.message_ttl_secs = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for {key}: '{value}'. Use a whole number of seconds"
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| {
        ConfigError::Message(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlashmasterConfig::default();
        assert!(config.data_dir.is_none());
        assert!(!config.hide_learned);
        assert_eq!(config.message_ttl_secs, 3);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = FlashmasterConfig::load_from(&path).unwrap();

        assert_eq!(config, FlashmasterConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = FlashmasterConfig::default();
        config.hide_learned = true;
        config.data_dir = Some(PathBuf::from("/tmp/flashmaster-data"));
        config.save_to(&path).unwrap();

        let loaded = FlashmasterConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = FlashmasterConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.message_ttl_secs, 3);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = FlashmasterConfig::default();

        config.set("hide_learned", "true").unwrap();
        assert_eq!(config.get("hide_learned").unwrap(), "true");

        config.set("message_ttl_secs", "10").unwrap();
        assert_eq!(config.message_ttl_secs, 10);

        config.set("data_dir", "/var/tmp/fm").unwrap();
        assert_eq!(config.get("data_dir").unwrap(), "/var/tmp/fm");
        config.set("data_dir", "").unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_set_invalid_values() {
        let mut config = FlashmasterConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("message_ttl_secs", "-1").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_resolved_data_dir_prefers_configured() {
        let config = FlashmasterConfig {
            data_dir: Some(PathBuf::from("/srv/cards")),
            ..FlashmasterConfig::default()
        };
        assert_eq!(config.resolved_data_dir().unwrap(), PathBuf::from("/srv/cards"));
        assert_eq!(
            FlashmasterConfig::store_path(Path::new("/srv/cards")),
            PathBuf::from("/srv/cards/learned.db")
        );
    }
}
