//! Queue configuration loading and validation.
//!
//! Sources are layered in this order, later ones overriding earlier ones:
//! the embedded `config.default.toml`, an optional `config.toml` file and
//! `TICKETLINE__*` environment variables (a `.env` file is read first).

use config::{Config, Environment, File, FileFormat};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod defaults;
pub mod setup;
pub mod validation;

pub use defaults::DEFAULT_CONFIG;
pub use validation::ConfigValidationError;

use crate::model::DEFAULT_LABEL_WIDTH;
use crate::queue_manager::DEFAULT_HISTORY_LIMIT;

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "TICKETLINE";

/// Errors raised while building a [`QueueConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Configuration loading failed: {0}. Please check your config.toml file and environment variables."
    )]
    Load(String),
    #[error("Failed to deserialize config: {0}")]
    Deserialize(String),
    #[error("Configuration validation failed: {}", join_messages(.0))]
    Validation(Vec<ConfigValidationError>),
}

fn join_messages(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Settings for a [`QueueManager`](crate::queue_manager::QueueManager) and its host process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueConfig {
    #[serde(default = "default_history_limit")]
    history_limit: usize,
    #[serde(default = "default_label_width")]
    label_width: usize,
    #[serde(default)]
    logging: LoggingConfig,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_label_width() -> usize {
    DEFAULT_LABEL_WIDTH
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT, DEFAULT_LABEL_WIDTH)
    }
}

impl QueueConfig {
    pub fn new(history_limit: usize, label_width: usize) -> Self {
        Self {
            history_limit,
            label_width,
            logging: LoggingConfig::default(),
        }
    }

    /// Maximum number of records in the recent-calls history
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Minimum digit count of the numeric part of a ticket label
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Some("info".to_string()),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn new(level: Option<String>, file: Option<String>) -> Self {
        Self { level, file }
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Parsed level, or `None` when the configured name is not a log level.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        match self.level().to_lowercase().as_str() {
            "trace" => Some(LevelFilter::Trace),
            "debug" => Some(LevelFilter::Debug),
            "info" => Some(LevelFilter::Info),
            "warn" => Some(LevelFilter::Warn),
            "error" => Some(LevelFilter::Error),
            "off" => Some(LevelFilter::Off),
            _ => None,
        }
    }
}

/// Loads and validates the configuration.
///
/// # Arguments
///
/// * `path` - Optional TOML file layered over the embedded defaults; it must exist when given
///
/// # Errors
///
/// Returns [`ConfigError`] when a source cannot be read, the merged values do
/// not deserialize, or any limit is out of range.
pub fn load_config(path: Option<&Path>) -> Result<QueueConfig, ConfigError> {
    dotenv::dotenv().ok();

    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    if let Some(path) = path {
        log::debug!("Loading configuration from {}", path.display());
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let queue_config = config
        .try_deserialize::<QueueConfig>()
        .map_err(|e| ConfigError::Deserialize(e.to_string()))?;

    queue_config.validate().map_err(ConfigError::Validation)?;

    Ok(queue_config)
}

/// Loads the configuration from the standard per-user location.
///
/// Falls back to defaults and environment variables when no file exists there.
pub fn load_default_config() -> Result<QueueConfig, ConfigError> {
    match setup::get_config_file_path() {
        Ok(path) if path.exists() => load_config(Some(&path)),
        Ok(path) => {
            log::info!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            load_config(None)
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            load_config(None)
        }
    }
}
