// Rust guideline compliant 2026-10-19

//! Error handling for timestamp application services.

use serde::Serialize;
use thiserror::Error;
use timestamps_core::Error as CoreError;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for callers that report failures as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A numeric count could not be parsed.
    ParseError,
    /// A calendar string did not match the expected format.
    FormatError,
    /// A value or range was out of bounds.
    RangeError,
    /// A minute-mark interval does not divide an hour.
    InvalidInterval,
    /// Configuration could not be loaded or validated.
    ConfigError,
    /// IO failure while reading or writing configuration.
    IoError,
    /// The request included invalid inputs.
    InvalidInput,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Core(core) => match core {
                CoreError::Parse { .. } | CoreError::UnknownUnit(_) => ErrorCode::ParseError,
                CoreError::Format(_) => ErrorCode::FormatError,
                CoreError::Range(_) => ErrorCode::RangeError,
                CoreError::InvalidInterval(_) => ErrorCode::InvalidInterval,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::InvalidInput(_) => None,
            AppError::Core(core) => match core {
                CoreError::Parse { input, unit, .. } => Some(serde_json::json!({
                    "input": input,
                    "unit": unit,
                })),
                CoreError::UnknownUnit(name) => Some(serde_json::json!({
                    "unit": name,
                })),
                CoreError::InvalidInterval(interval) => Some(serde_json::json!({
                    "interval_minutes": interval,
                })),
                _ => None,
            },
        }
    }
}
