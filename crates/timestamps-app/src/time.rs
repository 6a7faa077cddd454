// Rust guideline compliant 2026-10-19

//! Wall-clock convenience functions.
//!
//! These read the system clock and use the host's time zone. Code that needs
//! deterministic results should use [`Schedule`] with an injected clock.

use crate::error::Result;
use crate::schedule::Schedule;
use timestamps_core::{Clock, Instant, SystemClock};

/// Returns the current instant.
#[must_use]
pub fn now() -> Instant {
    SystemClock.now()
}

/// Returns the current Unix timestamp in whole seconds.
#[must_use]
pub fn unix_timestamp() -> i64 {
    now().seconds()
}

/// Returns the next exact UTC hour.
///
/// # Errors
///
/// Returns an error if the boundary is not representable.
pub fn next_hour_timestamp() -> Result<Instant> {
    Schedule::system().next_hour()
}

/// Returns local midnight of the next calendar day.
///
/// # Errors
///
/// Returns an error if the next day is outside the calendar range.
pub fn next_day_timestamp() -> Result<Instant> {
    Schedule::system().next_day()
}

/// Returns the next minute mark for `interval_minutes`.
///
/// # Errors
///
/// Returns an error if the interval does not divide 60.
pub fn next_minute_timestamp(interval_minutes: u32) -> Result<Instant> {
    Schedule::system().next_minute_mark(interval_minutes)
}
