//! `FlatKnn` configuration module.
//!
//! Provides configuration file support via `flatknn.toml`, environment
//! variables, and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (CLI flags)
//! 2. Environment variables (`FLATKNN_*`)
//! 3. Configuration file (`flatknn.toml`)
//! 4. Default values

use crate::selector::SelectorStrategy;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },

    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Search configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of nearest neighbors per query.
    pub k: usize,
    /// Selection structure strategy.
    pub strategy: SelectorStrategy,
    /// Maximum number of queries processed from the query set.
    pub max_queries: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 10,
            strategy: SelectorStrategy::BinaryHeap,
            max_queries: 100,
        }
    }
}

/// Dataset location section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the candidate vectors file (fvecs).
    pub points: String,
    /// Path to the query vectors file (fvecs).
    pub queries: String,
    /// Directory where result files are written.
    pub output_dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            points: String::new(),
            queries: String::new(),
            output_dir: ".".to_string(),
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatknnConfig {
    /// Search parameters.
    pub search: SearchConfig,
    /// Dataset locations.
    pub data: DataConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl FlatknnConfig {
    /// Loads configuration from default sources (`flatknn.toml` in the
    /// working directory, if present).
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("flatknn.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing or validation fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("FLATKNN_").split("_").lowercase(false));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.search.k == 0 {
            return Err(ConfigError::InvalidValue {
                key: "search.k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.search.max_queries == 0 {
            return Err(ConfigError::InvalidValue {
                key: "search.max_queries".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
