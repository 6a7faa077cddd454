// Rust guideline compliant 2026-10-19

//! Shared application services for timestamps.
//!
//! This crate binds the pure helpers of `timestamps-core` to a clock and a
//! time zone, and provides error codes and tracing setup for embedding
//! applications.

pub mod error;
pub mod logging;
pub mod schedule;
pub mod time;

pub use error::{AppError, ErrorCode, Result};
pub use logging::{init_tracing, init_tracing_from_config};
pub use schedule::{Schedule, Zone};
pub use time::{
    next_day_timestamp, next_hour_timestamp, next_minute_timestamp, now, unix_timestamp,
};
