// Rust guideline compliant 2026-10-19

//! Instant representation and unit-tagged construction.
//!
//! An [`Instant`] is a count of seconds since the Unix epoch plus a
//! sub-second nanosecond remainder. Every constructor normalizes the pair so
//! that the remainder lies in `[0, 999_999_999]`, using floor division for
//! pre-epoch values: `-1` millisecond is `seconds = -1, nanoseconds = 999_000_000`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: i64 = 1_000_000;
/// Nanoseconds in one minute.
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
/// Nanoseconds in one hour.
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// Precision of an integer timestamp count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Whole seconds since the epoch.
    Seconds,
    /// Milliseconds since the epoch.
    Milliseconds,
    /// Nanoseconds since the epoch.
    Nanoseconds,
}

impl TimeUnit {
    /// Returns how many nanoseconds one unit spans.
    #[must_use]
    pub fn nanos_per_unit(self) -> i64 {
        match self {
            TimeUnit::Seconds => NANOS_PER_SECOND,
            TimeUnit::Milliseconds => NANOS_PER_MILLI,
            TimeUnit::Nanoseconds => 1,
        }
    }

    /// Returns the lowercase plural name of the unit.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Nanoseconds => "nanoseconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    /// Parses a unit name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownUnit`] for names other than the short and long
    /// forms of seconds, milliseconds and nanoseconds.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "s" | "sec" | "secs" | "seconds" => Ok(TimeUnit::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "ns" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

/// A point in time relative to the Unix epoch.
///
/// Ordering follows time: the derived lexicographic order over
/// `(seconds, nanoseconds)` is correct because the remainder is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant {
    seconds: i64,
    nanoseconds: i64,
}

impl Instant {
    /// The Unix epoch, `1970-01-01T00:00:00.000Z`.
    pub const EPOCH: Instant = Instant {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Creates an instant from a seconds/nanoseconds pair.
    ///
    /// The nanosecond part may be out of range or negative; whole seconds are
    /// carried into `seconds` so the stored remainder is normalized.
    ///
    /// # Errors
    ///
    /// Returns a range error if the carry overflows the seconds field.
    pub fn new(seconds: i64, nanoseconds: i64) -> Result<Self> {
        let carry = nanoseconds.div_euclid(NANOS_PER_SECOND);
        let seconds = seconds.checked_add(carry).ok_or_else(|| {
            Error::Range(format!(
                "{seconds} seconds plus {nanoseconds} nanoseconds overflows"
            ))
        })?;
        Ok(Self {
            seconds,
            nanoseconds: nanoseconds.rem_euclid(NANOS_PER_SECOND),
        })
    }

    /// Creates an instant from an integer count in the given unit.
    #[must_use]
    pub fn from_units(value: i64, unit: TimeUnit) -> Self {
        let per_unit = unit.nanos_per_unit();
        let units_per_second = NANOS_PER_SECOND / per_unit;
        Self {
            seconds: value.div_euclid(units_per_second),
            nanoseconds: value.rem_euclid(units_per_second) * per_unit,
        }
    }

    /// Creates an instant from whole seconds since the epoch.
    #[must_use]
    pub fn from_secs(seconds: i64) -> Self {
        Self::from_units(seconds, TimeUnit::Seconds)
    }

    /// Creates an instant from milliseconds since the epoch.
    #[must_use]
    pub fn from_millis(milliseconds: i64) -> Self {
        Self::from_units(milliseconds, TimeUnit::Milliseconds)
    }

    /// Creates an instant from nanoseconds since the epoch.
    #[must_use]
    pub fn from_nanos(nanoseconds: i64) -> Self {
        Self::from_units(nanoseconds, TimeUnit::Nanoseconds)
    }

    /// Parses a decimal integer count in the given unit.
    ///
    /// # Arguments
    ///
    /// * `text` - Decimal integer, optionally signed, with no whitespace
    /// * `unit` - Unit the count is expressed in
    ///
    /// # Returns
    ///
    /// The normalized instant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `text` is not a valid `i64`.
    pub fn parse_units(text: &str, unit: TimeUnit) -> Result<Self> {
        let value = text.parse::<i64>().map_err(|source| {
            tracing::debug!(input = text, %unit, "rejected timestamp count");
            Error::Parse {
                input: text.to_string(),
                unit,
                source,
            }
        })?;
        Ok(Self::from_units(value, unit))
    }

    /// Creates an instant from an exact nanosecond count.
    ///
    /// # Errors
    ///
    /// Returns a range error if the seconds do not fit in an `i64`.
    pub fn from_nanos_i128(nanoseconds: i128) -> Result<Self> {
        let per_second = i128::from(NANOS_PER_SECOND);
        let seconds = i64::try_from(nanoseconds.div_euclid(per_second)).map_err(|_| {
            Error::Range(format!("{nanoseconds} nanoseconds is out of range"))
        })?;
        // rem_euclid is in [0, 1e9) so the narrowing is lossless.
        let remainder = nanoseconds.rem_euclid(per_second) as i64;
        Ok(Self {
            seconds,
            nanoseconds: remainder,
        })
    }

    /// Builds an instant from a `chrono` timestamp pair.
    ///
    /// `subsec_nanos` may exceed one second during a leap second; chrono's
    /// calendar range keeps `seconds` far from `i64::MAX`, so the carry
    /// cannot overflow.
    pub(crate) fn from_timestamp_parts(seconds: i64, subsec_nanos: u32) -> Self {
        let subsec = i64::from(subsec_nanos);
        Self {
            seconds: seconds + subsec / NANOS_PER_SECOND,
            nanoseconds: subsec % NANOS_PER_SECOND,
        }
    }

    /// Whole seconds since the epoch (floored).
    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second remainder in `[0, 999_999_999]`.
    #[must_use]
    pub fn nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    /// Exact nanoseconds since the epoch.
    #[must_use]
    pub fn as_nanos(&self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanoseconds)
    }

    /// Nanoseconds since the epoch as an `i64`.
    ///
    /// # Errors
    ///
    /// Returns a range error for instants outside roughly 1677..2262.
    pub fn timestamp_nanos(&self) -> Result<i64> {
        i64::try_from(self.as_nanos()).map_err(|_| {
            Error::Range(format!("{self} does not fit in an i64 nanosecond count"))
        })
    }

    /// Milliseconds since the epoch, floored.
    #[must_use]
    pub fn timestamp_millis(&self) -> i128 {
        self.as_nanos().div_euclid(i128::from(NANOS_PER_MILLI))
    }

    /// Whether the sub-second remainder is a whole number of milliseconds.
    #[must_use]
    pub fn is_millisecond_granular(&self) -> bool {
        self.nanoseconds % NANOS_PER_MILLI == 0
    }

    /// Drops everything below millisecond precision.
    #[must_use]
    pub fn truncate_to_millis(&self) -> Self {
        Self {
            seconds: self.seconds,
            nanoseconds: self.nanoseconds - self.nanoseconds % NANOS_PER_MILLI,
        }
    }

    /// Adds a signed nanosecond delta.
    ///
    /// # Errors
    ///
    /// Returns a range error if the result leaves the representable range.
    pub fn checked_add_nanos(&self, delta: i128) -> Result<Self> {
        Self::from_nanos_i128(self.as_nanos() + delta)
    }

    /// Two-line human-readable breakdown of the stored fields.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!(
            "Timestamp seconds: {}\nTimestamp nanoseconds: {}",
            self.seconds, self.nanoseconds
        )
    }

    /// Canonical `seconds.nanoseconds` form, same as `Display`.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}

/// Converts fractional seconds to a nanosecond count.
///
/// The result is rounded to the nearest nanosecond, so `2.555333444` yields
/// `2_555_333_444` despite binary floating point error.
///
/// # Errors
///
/// Returns a range error for NaN, infinities, or values beyond the `i64`
/// nanosecond range.
pub fn nanos_from_secs_f64(seconds: f64) -> Result<i64> {
    if !seconds.is_finite() {
        return Err(Error::Range(format!("{seconds} is not a finite number of seconds")));
    }
    let nanos = (seconds * NANOS_PER_SECOND as f64).round();
    if nanos < i64::MIN as f64 || nanos >= i64::MAX as f64 {
        return Err(Error::Range(format!(
            "{seconds} seconds does not fit in an i64 nanosecond count"
        )));
    }
    Ok(nanos as i64)
}
