use super::DEFAULT_CONFIG;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/ticketline on Unix-like systems
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push("ticketline");
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push("ticketline");
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.toml");
    Ok(config_dir)
}

/// Writes the embedded defaults to `path` unless a file is already there.
///
/// Returns `true` when a new file was written.
pub fn write_default_config(path: &std::path::Path) -> Result<bool, SetupError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SetupError::CreateDirError {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| SetupError::WriteFileError {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote default configuration to {}", path.display());
    Ok(true)
}
