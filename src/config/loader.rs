use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/listsync/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("listsync").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL parses
    /// - At least one collection is configured, names are unique
    /// - Every endpoint starts with `/`
    /// - The storage namespace is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if reqwest::Url::parse(&self.api.base_url).is_err() {
            return Err(invalid(format!(
                "API base_url '{}' is not a valid URL",
                self.api.base_url
            )));
        }

        if self.collections.is_empty() {
            return Err(invalid("At least one collection must be configured".to_string()));
        }

        let mut seen = HashSet::new();
        for collection in &self.collections {
            if collection.name.trim().is_empty() {
                return Err(invalid("Collection name must not be empty".to_string()));
            }
            if !seen.insert(collection.name.as_str()) {
                return Err(invalid(format!(
                    "Collection '{}' is configured twice",
                    collection.name
                )));
            }
            if !collection.endpoint.starts_with('/') {
                return Err(invalid(format!(
                    "Endpoint '{}' of collection '{}' must start with '/'",
                    collection.endpoint, collection.name
                )));
            }
        }

        if self.storage.namespace.trim().is_empty() {
            return Err(invalid("Storage namespace must not be empty".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
