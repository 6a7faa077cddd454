// Rust guideline compliant 2026-10-19

//! Property-based tests for boundary helpers.

use chrono::FixedOffset;
use proptest::prelude::*;
use timestamps_core::{
    minutes_earlier, minutes_later, next_day_in, next_hour, next_minute_mark,
    round_down_to_minute, to_local_string_secs_in, Instant,
};

const NANOS_PER_MINUTE: i128 = 60_000_000_000;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;

/// Nanosecond counts covering roughly 1678 through 2261.
fn arb_instant() -> impl Strategy<Value = Instant> {
    any::<i64>().prop_map(Instant::from_nanos)
}

fn arb_interval() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![1u32, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60])
}

proptest! {
    /// The next minute mark is strictly later and lands on a multiple of the interval.
    #[test]
    fn prop_next_minute_mark(now in arb_instant(), interval in arb_interval()) {
        let mark = next_minute_mark(now, interval).unwrap();
        prop_assert!(mark > now);
        prop_assert_eq!(mark.as_nanos() % NANOS_PER_MINUTE, 0);
        let minute_of_hour = mark.as_nanos().rem_euclid(NANOS_PER_HOUR) / NANOS_PER_MINUTE;
        prop_assert_eq!(minute_of_hour % i128::from(interval), 0);
        prop_assert!(mark.as_nanos() - now.as_nanos() <= i128::from(interval) * NANOS_PER_MINUTE);
    }

    /// The next hour is strictly later, aligned, and at most one hour away.
    #[test]
    fn prop_next_hour(now in arb_instant()) {
        let next = next_hour(now).unwrap();
        prop_assert!(next > now);
        prop_assert_eq!(next.as_nanos().rem_euclid(NANOS_PER_HOUR), 0);
        prop_assert!(next.as_nanos() - now.as_nanos() <= NANOS_PER_HOUR);
    }

    /// Rounding down is idempotent, aligned, and never moves forward.
    #[test]
    fn prop_round_down_to_minute(instant in arb_instant()) {
        let rounded = round_down_to_minute(instant);
        prop_assert!(rounded <= instant);
        prop_assert_eq!(round_down_to_minute(rounded), rounded);
        prop_assert_eq!(rounded.as_nanos().rem_euclid(NANOS_PER_MINUTE), 0);
        prop_assert!(instant.as_nanos() - rounded.as_nanos() < NANOS_PER_MINUTE);
    }

    /// Shifting forward then backward by the same amount is the identity.
    #[test]
    fn prop_shift_symmetry(instant in arb_instant(), minutes in -1_000_000i64..1_000_000) {
        let moved = minutes_later(instant, minutes).unwrap();
        prop_assert_eq!(minutes_earlier(moved, minutes).unwrap(), instant);
        prop_assert_eq!(
            moved.as_nanos() - instant.as_nanos(),
            i128::from(minutes) * NANOS_PER_MINUTE
        );
    }

    /// The next day starts at local midnight, strictly later, within a day.
    #[test]
    fn prop_next_day_is_local_midnight(
        secs in 0i64..4_102_444_800,
        offset_minutes in -720i32..=840,
    ) {
        let tz = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let now = Instant::from_secs(secs);
        let next = next_day_in(now, &tz).unwrap();
        prop_assert!(next > now);
        prop_assert!(next.as_nanos() - now.as_nanos() <= 24 * NANOS_PER_HOUR);
        let local = to_local_string_secs_in(next, &tz).unwrap();
        prop_assert!(local.ends_with("T00:00:00"), "got {}", local);
    }
}
