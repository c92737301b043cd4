use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TEMPLATE_EXPORTER_CONFIG";

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
    /// `$TEMPLATE_EXPORTER_CONFIG` if set, otherwise
    /// `<config_dir>/template-exporter/config.toml` via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("template-exporter").join("config.toml")
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
    /// - `log_level` is a valid tracing filter
    /// - No catalog path is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = EnvFilter::try_new(&self.defaults.log_level) {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid log_level '{}': {}", self.defaults.log_level, e),
            });
        }

        if self.catalog.paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "Catalog paths must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
