use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },
}

/// Installs the global logger for a process hosting a queue manager.
///
/// Logs go to the configured file, or to stderr when none is set. An unknown
/// level name falls back to `info`.
pub fn setup_logger(config: &LoggingConfig) -> Result<(), LoggerError> {
    let log_level = config.level_filter().unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    match config.file() {
        Some(file_path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)
                .map_err(|source| LoggerError::LogFile {
                    path: file_path.to_string(),
                    source,
                })?;
            base_config.chain(file).apply()?;
            log::info!("Logging to file: {file_path}");
        }
        None => base_config.chain(std::io::stderr()).apply()?,
    }

    Ok(())
}
