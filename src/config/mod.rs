//! Configuration module for curio
//!
//! Manages the API key, endpoint, and browse defaults. Configuration is
//! stored as TOML in the user's config directory and may be overridden by
//! `CURIO_*` environment variables (e.g. `CURIO_API_KEY`).

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

/// Keys accepted by `curio config get/set`
pub const CONFIG_KEYS: &[&str] = &[
    "api_key",
    "base_url",
    "page_size",
    "request_timeout_secs",
    "start_term",
    "start_value",
    "log_file",
    "quiet",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurioConfig {
    /// API key sent with every term/value query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the collection API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records per page; the API default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// Field queried when `browse` starts without a query
    #[serde(default = "default_start_term")]
    pub start_term: String,

    /// Value queried when `browse` starts without a query
    #[serde(default = "default_start_value")]
    pub start_value: String,

    /// Log file for the TUI; see [`CurioConfig::log_path`] for the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_start_term() -> String {
    "hasimage".to_string()
}

fn default_start_value() -> String {
    "1".to_string()
}

impl Default for CurioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            page_size: None,
            request_timeout_secs: default_timeout(),
            start_term: default_start_term(),
            start_value: default_start_value(),
            log_file: None,
            quiet: false,
        }
    }
}

impl CurioConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("curio").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, layering `CURIO_*` variables on top
    ///
    /// A missing file yields the defaults plus any environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("CURIO").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from `path` alone, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()?
            .try_deserialize()
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
    /// Same as [`CurioConfig::save`].
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

    /// Default browser log file, `curio/curio.log` under the user's cache directory
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("curio").join("curio.log"))
    }

    /// Where the browser writes its log
    ///
    /// The configured `log_file` if set, otherwise [`CurioConfig::default_log_path`].
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()
        }
    }

    /// Read a setting as text
    ///
    /// Unset optional settings read as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "api_key" => self.api_key.clone().unwrap_or_default(),
            "base_url" => self.base_url.clone(),
            "page_size" => self.page_size.map(|n| n.to_string()).unwrap_or_default(),
            "request_timeout_secs" => self.request_timeout_secs.to_string(),
            "start_term" => self.start_term.clone(),
            "start_value" => self.start_value.clone(),
            "log_file" => self
                .log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "quiet" => self.quiet.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Update a setting from text; an empty value unsets optional settings
    ///
    /// Does not save.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that doesn't parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "api_key" => self.api_key = optional(value).map(str::to_string),
            "base_url" => {
                if value.is_empty() {
                    return Err(ConfigError::Message("base_url cannot be empty".into()));
                }
                self.base_url = value.to_string();
            }
            "page_size" => {
                self.page_size = optional(value).map(|v| parse_value(key, v)).transpose()?;
            }
            "request_timeout_secs" => self.request_timeout_secs = parse_value(key, value)?,
            "start_term" => self.start_term = value.to_string(),
            "start_value" => self.start_value = value.to_string(),
            "log_file" => self.log_file = optional(value).map(PathBuf::from),
            "quiet" => self.quiet = parse_value(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn optional(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Message(format!("Invalid value for {key}: '{value}'")))
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::NotFound(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CurioConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.start_term, "hasimage");
        assert_eq!(config.start_value, "1");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CurioConfig::default();
        config.api_key = Some("abc123".into());
        config.page_size = Some(25);
        config.log_file = Some(PathBuf::from("/tmp/curio.log"));
        config.save_to(&path).unwrap();

        let loaded = CurioConfig::load_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = CurioConfig::load_file(&path).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.start_term, "hasimage");
    }

    #[test]
    fn test_set_and_get_values() {
        let mut config = CurioConfig::default();

        config.set_value("api_key", "key").unwrap();
        config.set_value("page_size", "50").unwrap();
        config.set_value("quiet", "true").unwrap();
        config.set_value("start_term", "culture").unwrap();

        assert_eq!(config.get_value("api_key").unwrap(), "key");
        assert_eq!(config.get_value("page_size").unwrap(), "50");
        assert_eq!(config.get_value("quiet").unwrap(), "true");
        assert_eq!(config.get_value("start_term").unwrap(), "culture");

        config.set_value("page_size", "").unwrap();
        assert_eq!(config.page_size, None);
        assert_eq!(config.get_value("log_file").unwrap(), "");
    }

    #[test]
    fn test_log_path_falls_back_to_cache_dir() {
        let mut config = CurioConfig::default();
        assert_eq!(config.log_path(), CurioConfig::default_log_path());
        if let Some(path) = config.log_path() {
            assert!(path.ends_with("curio/curio.log"));
        }

        config.set_value("log_file", "/var/tmp/browse.log").unwrap();
        assert_eq!(config.log_path(), Some(PathBuf::from("/var/tmp/browse.log")));

        config.set_value("log_file", "").unwrap();
        assert_eq!(config.log_path(), CurioConfig::default_log_path());
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = CurioConfig::default();
        assert!(config.set_value("page_size", "many").is_err());
        assert!(config.set_value("quiet", "maybe").is_err());
        assert!(config.set_value("base_url", "").is_err());
        assert!(config.set_value("colour", "red").is_err());
        assert!(config.get_value("colour").is_err());
    }
}
