// Rust guideline compliant 2026-10-19

//! Calendar string conversions.
//!
//! Two fixed-width formats are supported:
//!
//! - UTC-Z: `YYYY-MM-DDTHH:MM:SS.mmmZ`, always UTC
//! - Local: `YYYY-MM-DDTHH:MM:SS.mmm` (or without `.mmm`) in a given offset rule
//!
//! Milliseconds are truncated from the nanosecond remainder, so formatting is
//! lossy below millisecond precision. Only millisecond-granular instants
//! survive a format/parse round trip unchanged.

use crate::instant::TimeUnit;
use crate::{Error, Instant, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;
use std::ops::Range;

const UTCZ_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const LOCAL_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const LOCAL_SECS_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Shape of the calendar body shared by both formats; `d` marks a digit.
const CALENDAR_SHAPE: &[u8; 23] = b"dddd-dd-ddTdd:dd:dd.ddd";

/// Converts an instant to a UTC `chrono` date-time.
///
/// # Errors
///
/// Returns a range error if the instant is beyond chrono's calendar range.
pub fn to_utc_datetime(instant: Instant) -> Result<DateTime<Utc>> {
    // The remainder is normalized to [0, 1e9), so it always fits in a u32.
    let nanos = instant.nanoseconds() as u32;
    DateTime::from_timestamp(instant.seconds(), nanos).ok_or_else(|| {
        Error::Range(format!("{instant} is outside the supported calendar range"))
    })
}

/// Converts a `chrono` date-time in any zone to an instant.
#[must_use]
pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Instant {
    Instant::from_timestamp_parts(datetime.timestamp(), datetime.timestamp_subsec_nanos())
}

fn check_year<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<()> {
    let year = datetime.year();
    if (0..=9999).contains(&year) {
        Ok(())
    } else {
        Err(Error::Range(format!(
            "year {year} does not fit the four-digit year field"
        )))
    }
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// # Arguments
///
/// * `instant` - Instant to format
///
/// # Returns
///
/// The UTC-Z string with milliseconds truncated.
///
/// # Errors
///
/// Returns a range error if the UTC year is outside 0000-9999.
pub fn format_utcz(instant: Instant) -> Result<String> {
    let utc = to_utc_datetime(instant)?;
    check_year(&utc)?;
    Ok(utc.format(UTCZ_PATTERN).to_string())
}

/// Parses a string produced by [`format_utcz`].
///
/// Only the exact fixed-width shape is accepted: four-digit year, two-digit
/// month/day/hour/minute/second, three-digit milliseconds and a trailing `Z`.
///
/// # Errors
///
/// Returns [`Error::Format`] for any other input, including the local format.
pub fn parse_utcz(text: &str) -> Result<Instant> {
    let naive = text
        .strip_suffix('Z')
        .ok_or("missing trailing Z")
        .and_then(parse_calendar)
        .map_err(|reason| format_error(text, reason, "YYYY-MM-DDTHH:MM:SS.mmmZ"))?;
    Ok(from_datetime(&Utc.from_utc_datetime(&naive)))
}

/// Parses a UTC-Z string and reformats it in the given offset rule.
///
/// # Errors
///
/// Returns a format error for malformed input, or a range error if the local
/// year is outside 0000-9999.
pub fn utcz_to_local_string_in<Tz>(text: &str, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    to_local_string_in(parse_utcz(text)?, tz)
}

/// Parses a decimal count in `unit` and formats it as UTC-Z.
///
/// # Errors
///
/// Returns a parse error for a malformed count, or a range error if the year
/// is outside 0000-9999.
pub fn convert_to_utcz(text: &str, unit: TimeUnit) -> Result<String> {
    format_utcz(Instant::parse_units(text, unit)?)
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmm` in the given offset rule.
///
/// # Errors
///
/// Returns a range error if the local year is outside 0000-9999.
pub fn to_local_string_in<Tz>(instant: Instant, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_local(instant, tz, LOCAL_PATTERN)
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS` in the given offset rule.
///
/// # Errors
///
/// Returns a range error if the local year is outside 0000-9999.
pub fn to_local_string_secs_in<Tz>(instant: Instant, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_local(instant, tz, LOCAL_SECS_PATTERN)
}

/// Formats an instant in the host's local time, with milliseconds.
///
/// # Errors
///
/// Returns a range error if the local year is outside 0000-9999.
pub fn to_local_string(instant: Instant) -> Result<String> {
    to_local_string_in(instant, &Local)
}

/// Formats an instant in the host's local time, without milliseconds.
///
/// # Errors
///
/// Returns a range error if the local year is outside 0000-9999.
pub fn to_local_string_secs(instant: Instant) -> Result<String> {
    to_local_string_secs_in(instant, &Local)
}

/// Parses `YYYY-MM-DDTHH:MM:SS.mmm` as a local time in the given offset rule.
///
/// When a DST fold makes the local time ambiguous the earlier instant wins.
///
/// # Errors
///
/// Returns a format error for malformed input, or a range error if the local
/// time falls in a DST gap.
pub fn parse_local_in<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<Instant> {
    let naive = parse_calendar(text)
        .map_err(|reason| format_error(text, reason, "YYYY-MM-DDTHH:MM:SS.mmm"))?;
    let local = tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        Error::Range(format!("{text:?} does not exist in the local time zone"))
    })?;
    Ok(from_datetime(&local))
}

fn format_local<Tz>(instant: Instant, tz: &Tz, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = to_utc_datetime(instant)?.with_timezone(tz);
    check_year(&local)?;
    Ok(local.format(pattern).to_string())
}

fn format_error(text: &str, reason: &str, expected: &str) -> Error {
    tracing::debug!(input = text, reason, "rejected calendar string");
    Error::Format(format!("{text:?} is not a valid timestamp ({reason}), expected {expected}"))
}

/// Validates the fixed-width calendar body and builds the naive date-time.
fn parse_calendar(body: &str) -> std::result::Result<NaiveDateTime, &'static str> {
    let bytes = body.as_bytes();
    if bytes.len() != CALENDAR_SHAPE.len() {
        return Err("wrong length");
    }
    for (byte, expected) in bytes.iter().zip(CALENDAR_SHAPE) {
        let matches = if *expected == b'd' {
            byte.is_ascii_digit()
        } else {
            byte == expected
        };
        if !matches {
            return Err("unexpected character");
        }
    }

    let field = |range: Range<usize>| {
        bytes[range]
            .iter()
            .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'))
    };

    // At most four digits, so the year always fits in an i32.
    let year = field(0..4) as i32;
    NaiveDate::from_ymd_opt(year, field(5..7), field(8..10))
        .ok_or("invalid calendar date")?
        .and_hms_milli_opt(field(11..13), field(14..16), field(17..19), field(20..23))
        .ok_or("invalid time of day")
}
