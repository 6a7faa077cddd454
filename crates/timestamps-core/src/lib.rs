// Rust guideline compliant 2026-10-19

//! Timestamps Core Library
//!
//! This crate provides the building blocks for working with epoch timestamps:
//! - Instant representation with second, millisecond and nanosecond views
//! - UTC-Z and local calendar string conversions
//! - Calendar-aligned boundaries (next minute mark, hour, day) and minute arithmetic
//! - Range partitioning into fixed-size spans
//! - Injectable clocks, configuration, and error types

pub mod boundary;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod instant;
pub mod partition;

pub use boundary::{
    is_first_minute_of_hour, is_first_minute_of_hour_nanos, minutes_earlier, minutes_later,
    next_day, next_day_in, next_hour, next_minute_mark, round_down_to_minute, shift_minutes,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use format::{
    convert_to_utcz, format_utcz, parse_local_in, parse_utcz, to_local_string,
    to_local_string_in, to_local_string_secs, to_local_string_secs_in, utcz_to_local_string_in,
};
pub use instant::{nanos_from_secs_f64, Instant, TimeUnit};
pub use partition::{
    partition_instants, partition_range, TimeRangePartition, MAX_PARTITION_SPANS,
};
