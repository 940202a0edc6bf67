//! File logging for applications embedding the library.
//!
//! The library itself only talks to the `log` facade. This module wires that
//! facade to a log file with `fern`, driven by [`LoggingConfig`].

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};

/// Default location of the log file: `<data_local_dir>/timekit/timekit.log`.
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Parse the configured level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn level_filter(config: &LoggingConfig) -> Result<LevelFilter> {
    LevelFilter::from_str(&config.level).with_context(|| format!("Invalid log level '{}'", config.level))
}

/// Resolve the log file, preferring the configured path.
pub fn log_file_path(config: &LoggingConfig) -> Result<PathBuf> {
    match &config.file {
        Some(path) => Ok(path.clone()),
        None => get_log_file_path(),
    }
}

/// Format a single log line.
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!(
        "[{} {} {}] {}",
        Utc::now().format(LOG_TIMESTAMP_FORMAT),
        level,
        target,
        message
    )
}

/// Build the dispatch described by `config`, or `None` when logging is disabled.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Option<fern::Dispatch>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = level_filter(config)?;
    let path = log_file_path(config)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}", format_line(record.level(), record.target(), message)))
        })
        .level(level)
        .chain(file);
    Ok(Some(dispatch))
}

/// Install the global logger. Returns `false` when logging is disabled.
///
/// A process can only install one logger; calling this twice is an error.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    match build_dispatch(config)? {
        Some(dispatch) => {
            dispatch.apply().context("Failed to install logger")?;
            log::info!("Logging initialized at level {}", config.level);
            Ok(true)
        }
        None => Ok(false),
    }
}
