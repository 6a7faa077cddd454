// Rust guideline compliant 2026-10-19

//! Error types for the timestamps core library.

use crate::instant::TimeUnit;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for timestamp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for timestamp operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A decimal count could not be parsed in the requested unit.
    #[error("Parse error: {input:?} is not a valid {unit} count: {source}")]
    Parse {
        /// The rejected input text.
        input: String,
        /// Unit the input was meant to be counted in.
        unit: TimeUnit,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// A time unit name was not recognized.
    #[error("Parse error: unknown time unit {0:?}, expected s, ms or ns")]
    UnknownUnit(String),

    /// A string did not match the expected calendar format.
    #[error("Format error: {0}")]
    Format(String),

    /// A value fell outside the supported range.
    #[error("Range error: {0}")]
    Range(String),

    /// Minute-mark interval does not evenly divide an hour.
    #[error("Invalid interval: {0} minutes does not evenly divide 60")]
    InvalidInterval(u32),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
