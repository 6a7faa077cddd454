// Rust guideline compliant 2026-10-19

//! Property-based tests for instant construction.

use proptest::prelude::*;
use timestamps_core::{Instant, TimeUnit};

fn arb_unit() -> impl Strategy<Value = TimeUnit> {
    prop_oneof![
        Just(TimeUnit::Seconds),
        Just(TimeUnit::Milliseconds),
        Just(TimeUnit::Nanoseconds),
    ]
}

proptest! {
    /// Whole seconds always render with a zero nanosecond field.
    #[test]
    fn prop_whole_seconds_dotted(seconds in 0i64..i64::MAX) {
        prop_assert_eq!(
            Instant::from_secs(seconds).dotted(),
            format!("{seconds}.000000000")
        );
    }

    /// Every unit constructor normalizes the remainder and preserves the value.
    #[test]
    fn prop_unit_construction_normalized(value in any::<i64>(), unit in arb_unit()) {
        let instant = Instant::from_units(value, unit);
        prop_assert!((0..1_000_000_000).contains(&instant.nanoseconds()));
        prop_assert_eq!(
            instant.as_nanos(),
            i128::from(value) * i128::from(unit.nanos_per_unit())
        );
    }

    /// Parsing the decimal text of a count matches direct construction.
    #[test]
    fn prop_parse_units_matches_from_units(value in any::<i64>(), unit in arb_unit()) {
        let parsed = Instant::parse_units(&value.to_string(), unit).unwrap();
        prop_assert_eq!(parsed, Instant::from_units(value, unit));
    }

    /// Ordering of instants agrees with ordering of nanosecond counts.
    #[test]
    fn prop_ordering_matches_nanos(a in any::<i64>(), b in any::<i64>()) {
        let left = Instant::from_nanos(a);
        let right = Instant::from_nanos(b);
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
    }
}
