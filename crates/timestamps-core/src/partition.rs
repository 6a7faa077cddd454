// Rust guideline compliant 2026-10-19

//! Splitting a time range into fixed-size spans.
//!
//! Spans cover `[start, stop]` contiguously. Every span except the last ends
//! one millisecond before the next span begins, so adjacent spans never share
//! a textual endpoint. The last span is clamped to `stop`, which also covers
//! ranges shorter than one span and spans that do not divide the range evenly.

use crate::format::{format_utcz, parse_utcz};
use crate::instant::{NANOS_PER_MILLI, NANOS_PER_MINUTE};
use crate::{Error, Instant, Result};

/// Most spans a single partition may produce.
pub const MAX_PARTITION_SPANS: usize = 1_000_000;

/// One span of a partitioned range, as UTC-Z strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangePartition {
    /// First instant covered by the span.
    pub begin: String,
    /// Last instant covered by the span.
    pub end: String,
}

/// Partitions `[start, stop]` into spans of `span_minutes`.
///
/// # Arguments
///
/// * `start` - First instant of the range
/// * `stop` - Last instant of the range, which ends the final span
/// * `span_minutes` - Length of each span
///
/// # Returns
///
/// `(begin, end)` pairs in chronological order.
///
/// # Errors
///
/// Returns a range error if `stop <= start`, if `span_minutes` is not
/// positive, if the range needs more than [`MAX_PARTITION_SPANS`] spans, or
/// if a span boundary is not representable.
pub fn partition_instants(
    start: Instant,
    stop: Instant,
    span_minutes: i64,
) -> Result<Vec<(Instant, Instant)>> {
    if stop <= start {
        return Err(Error::Range(format!(
            "range stop {stop} must be after start {start}"
        )));
    }
    if span_minutes <= 0 {
        return Err(Error::Range(format!(
            "span must be a positive number of minutes, got {span_minutes}"
        )));
    }

    let span = i128::from(span_minutes) * i128::from(NANOS_PER_MINUTE);
    let length = stop.as_nanos() - start.as_nanos();
    let count = (length + span - 1) / span;
    let count = usize::try_from(count)
        .ok()
        .filter(|count| *count <= MAX_PARTITION_SPANS)
        .ok_or_else(|| {
            Error::Range(format!(
                "{span_minutes}-minute spans over {start}..{stop} exceed {MAX_PARTITION_SPANS} spans"
            ))
        })?;

    let back_one_milli = -i128::from(NANOS_PER_MILLI);
    let mut spans = Vec::with_capacity(count);
    let mut begin = start;
    loop {
        let next = begin.checked_add_nanos(span)?;
        if next >= stop {
            spans.push((begin, stop));
            break;
        }
        spans.push((begin, next.checked_add_nanos(back_one_milli)?));
        begin = next;
    }

    tracing::debug!(%start, %stop, span_minutes, spans = spans.len(), "partitioned range");
    Ok(spans)
}

/// Partitions a range given as UTC-Z strings into spans of `span_minutes`.
///
/// # Errors
///
/// Returns a format error if either endpoint is not UTC-Z, plus every error
/// [`partition_instants`] can return.
pub fn partition_range(
    start: &str,
    stop: &str,
    span_minutes: i64,
) -> Result<Vec<TimeRangePartition>> {
    let start = parse_utcz(start)?;
    let stop = parse_utcz(stop)?;
    partition_instants(start, stop, span_minutes)?
        .into_iter()
        .map(|(begin, end)| {
            Ok(TimeRangePartition {
                begin: format_utcz(begin)?,
                end: format_utcz(end)?,
            })
        })
        .collect()
}
