// Rust guideline compliant 2026-10-19

//! Calendar-aligned boundaries and minute arithmetic.
//!
//! Every helper takes the reference instant explicitly. Helpers that depend on
//! local calendar fields also take the offset rule as a [`chrono::TimeZone`],
//! so results are deterministic under test. Reading the wall clock is left to
//! [`crate::Clock`].

use crate::format::{from_datetime, to_utc_datetime};
use crate::instant::{NANOS_PER_HOUR, NANOS_PER_MINUTE};
use crate::{Error, Instant, Result};
use chrono::{DateTime, Local, TimeZone, Timelike};

impl Instant {
    /// Checks whether the instant falls in the first minute of a UTC hour.
    #[must_use]
    pub fn is_first_minute_of_hour(&self) -> bool {
        self.as_nanos().rem_euclid(i128::from(NANOS_PER_HOUR)) < i128::from(NANOS_PER_MINUTE)
    }
}

/// Returns the next exact hour strictly after `now`.
///
/// This is a fixed multiple of 3600 seconds since the epoch. Local calendar
/// irregularities such as half-hour offsets are not considered.
///
/// # Errors
///
/// Returns a range error if the boundary is not representable.
pub fn next_hour(now: Instant) -> Result<Instant> {
    let hour = i128::from(NANOS_PER_HOUR);
    let hours = now.as_nanos().div_euclid(hour);
    Instant::from_nanos_i128((hours + 1) * hour)
}

/// Returns local midnight of the calendar day after `now` in `tz`.
///
/// The result is derived from calendar fields, so month and year rollover,
/// leap days and DST-shortened days are handled. When midnight itself is
/// skipped by a DST transition, the first valid whole local hour is used.
///
/// # Arguments
///
/// * `now` - Reference instant
/// * `tz` - Offset rule that defines the local calendar
///
/// # Returns
///
/// The instant at which the next local day starts.
///
/// # Errors
///
/// Returns a range error if the next day is outside the calendar range.
pub fn next_day_in<Tz: TimeZone>(now: Instant, tz: &Tz) -> Result<Instant> {
    let today = to_utc_datetime(now)?.with_timezone(tz).date_naive();
    let tomorrow = today
        .succ_opt()
        .ok_or_else(|| Error::Range(format!("no calendar day follows {today}")))?;

    let start = (0..4)
        .filter_map(|hour| tomorrow.and_hms_opt(hour, 0, 0))
        .find_map(|naive| tz.from_local_datetime(&naive).earliest())
        .ok_or_else(|| Error::Range(format!("{tomorrow} has no valid local start")))?;
    Ok(from_datetime(&start))
}

/// Returns local midnight of the next calendar day in the host's time zone.
///
/// # Errors
///
/// Returns a range error if the next day is outside the calendar range.
pub fn next_day(now: Instant) -> Result<Instant> {
    next_day_in(now, &Local)
}

/// Returns the next instant strictly after `now` whose minute-of-hour is a
/// multiple of `interval_minutes`.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless the interval evenly divides 60,
/// or a range error if the mark is not representable.
pub fn next_minute_mark(now: Instant, interval_minutes: u32) -> Result<Instant> {
    if interval_minutes == 0 || 60 % interval_minutes != 0 {
        return Err(Error::InvalidInterval(interval_minutes));
    }
    let minute = i128::from(NANOS_PER_MINUTE);
    let step = i128::from(interval_minutes);
    let minutes = now.as_nanos().div_euclid(minute);
    let mark = (minutes.div_euclid(step) + 1) * step;
    Instant::from_nanos_i128(mark * minute)
}

/// Truncates an instant to the start of its minute.
///
/// The result is never later than `instant`. It saturates at the lowest
/// representable second.
#[must_use]
pub fn round_down_to_minute(instant: Instant) -> Instant {
    let seconds = instant.seconds();
    Instant::from_secs(seconds.saturating_sub(seconds.rem_euclid(60)))
}

/// Shifts an instant by a signed number of minutes.
///
/// # Errors
///
/// Returns a range error if the result is not representable.
pub fn shift_minutes(instant: Instant, minutes: i64) -> Result<Instant> {
    shift(instant, i128::from(minutes))
}

/// Shifts an instant forward by `minutes`.
///
/// # Errors
///
/// Returns a range error if the result is not representable.
pub fn minutes_later(instant: Instant, minutes: i64) -> Result<Instant> {
    shift(instant, i128::from(minutes))
}

/// Shifts an instant backward by `minutes`.
///
/// # Errors
///
/// Returns a range error if the result is not representable.
pub fn minutes_earlier(instant: Instant, minutes: i64) -> Result<Instant> {
    shift(instant, -i128::from(minutes))
}

fn shift(instant: Instant, minutes: i128) -> Result<Instant> {
    instant.checked_add_nanos(minutes * i128::from(NANOS_PER_MINUTE))
}

/// Checks whether a wall-clock value is within the first minute of its hour.
#[must_use]
pub fn is_first_minute_of_hour<Tz: TimeZone>(datetime: &DateTime<Tz>) -> bool {
    datetime.minute() == 0
}

/// Checks whether a raw nanosecond count is within the first minute of a UTC
/// hour.
#[must_use]
pub fn is_first_minute_of_hour_nanos(nanoseconds: i64) -> bool {
    nanoseconds.rem_euclid(NANOS_PER_HOUR) < NANOS_PER_MINUTE
}
