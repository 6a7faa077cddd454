// Rust guideline compliant 2026-10-19

//! Tracing subscriber setup.

use crate::error::{AppError, Result};
use timestamps_core::Config;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs a JSON `fmt` subscriber at the given level.
///
/// A subscriber that is already installed is left in place.
///
/// # Arguments
///
/// * `level` - One of `error`, `warn`, `info`, `debug`, `trace`
///
/// # Errors
///
/// Returns an error if the level is unknown.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Installs the subscriber using the configured log level.
///
/// # Errors
///
/// Returns an error if the configured level is unknown.
pub fn init_tracing_from_config(config: &Config) -> Result<()> {
    init_tracing(&config.log_level)
}

/// Parses a case-insensitive log level name.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(AppError::InvalidInput(format!("Invalid log level: {other}"))),
    }
}
