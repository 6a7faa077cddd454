// Rust guideline compliant 2026-10-19

//! Integration tests for clock- and zone-bound schedules.

use chrono::FixedOffset;
use proptest::prelude::*;
use timestamps_app::{
    next_day_timestamp, next_hour_timestamp, next_minute_timestamp, now, unix_timestamp,
    AppError, ErrorCode, Schedule, Zone,
};
use timestamps_core::{format_utcz, parse_utcz, Config, FixedClock, Instant};

/// 2020-02-29T15:00:00-05:00
const LEAP_DAY_AFTERNOON: i64 = 1_583_006_400;
/// 2020-03-01T00:00:00-05:00
const MARCH_FIRST_MIDNIGHT: i64 = 1_583_038_800;

fn utc_minus_five() -> Zone {
    Zone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap())
}

fn leap_day_schedule() -> Schedule<FixedClock> {
    Schedule::new(
        FixedClock(Instant::from_secs(LEAP_DAY_AFTERNOON)),
        utc_minus_five(),
    )
}

#[test]
fn test_schedule_now_reads_clock() {
    let schedule = leap_day_schedule();
    assert_eq!(schedule.now(), Instant::from_secs(LEAP_DAY_AFTERNOON));
}

#[test]
fn test_schedule_next_day_rolls_over_leap_month() {
    let schedule = leap_day_schedule();
    assert_eq!(
        schedule.next_day().unwrap(),
        Instant::from_secs(MARCH_FIRST_MIDNIGHT)
    );
    assert_eq!(
        schedule
            .to_local_string_secs(schedule.next_day().unwrap())
            .unwrap(),
        "2020-03-01T00:00:00"
    );
}

#[test]
fn test_schedule_next_hour() {
    let schedule = leap_day_schedule();
    assert_eq!(
        format_utcz(schedule.next_hour().unwrap()).unwrap(),
        "2020-02-29T21:00:00.000Z"
    );
}

#[test]
fn test_schedule_next_minute_mark() {
    let clock = FixedClock(parse_utcz("2020-02-29T20:07:30.000Z").unwrap());
    let schedule = Schedule::new(clock, Zone::Host);
    assert_eq!(
        format_utcz(schedule.next_minute_mark(15).unwrap()).unwrap(),
        "2020-02-29T20:15:00.000Z"
    );

    let error = schedule.next_minute_mark(7).unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidInterval);
    assert_eq!(
        error.details(),
        Some(serde_json::json!({ "interval_minutes": 7 }))
    );
}

#[test]
fn test_schedule_first_minute_of_hour_uses_zone() {
    let clock = FixedClock(parse_utcz("2020-01-01T00:00:30.000Z").unwrap());
    let utc = Schedule::new(clock, Zone::Fixed(FixedOffset::east_opt(0).unwrap()));
    assert!(utc.is_first_minute_of_hour().unwrap());

    let india = Schedule::new(
        clock,
        Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()),
    );
    assert!(!india.is_first_minute_of_hour().unwrap());
}

#[test]
fn test_schedule_from_config() {
    let config = Config {
        utc_offset_minutes: Some(-240),
        ..Config::default()
    };
    let schedule = Schedule::from_config(FixedClock(Instant::EPOCH), &config);
    assert_eq!(
        schedule.zone(),
        Zone::Fixed(FixedOffset::west_opt(4 * 3600).unwrap())
    );

    let instant = parse_utcz("2020-06-11T20:21:22.335Z").unwrap();
    assert_eq!(
        schedule.to_local_string(instant).unwrap(),
        "2020-06-11T16:21:22.335"
    );

    let host = Schedule::from_config(FixedClock(Instant::EPOCH), &Config::default());
    assert_eq!(host.zone(), Zone::Host);
}

#[test]
fn test_system_time_helpers() {
    let before = now();
    assert!(unix_timestamp() >= before.seconds());

    let next_hour = next_hour_timestamp().unwrap();
    assert!(next_hour > before);
    assert_eq!(next_hour.seconds() % 3600, 0);

    assert!(next_day_timestamp().unwrap() > before);

    let mark = next_minute_timestamp(10).unwrap();
    assert!(mark > before);
    assert!(matches!(
        next_minute_timestamp(9),
        Err(AppError::Core(timestamps_core::Error::InvalidInterval(9)))
    ));
}

proptest! {
    /// A schedule's next day is always local midnight in its fixed zone.
    #[test]
    fn prop_schedule_next_day_is_local_midnight(
        secs in 0i64..4_102_444_800,
        offset_hours in -12i32..=14,
    ) {
        let zone = Zone::Fixed(FixedOffset::east_opt(offset_hours * 3600).unwrap());
        let schedule = Schedule::new(FixedClock(Instant::from_secs(secs)), zone);
        let next = schedule.next_day().unwrap();
        prop_assert!(next > schedule.now());
        let local = schedule.to_local_string(next).unwrap();
        prop_assert!(local.ends_with("T00:00:00.000"), "got {}", local);
    }
}
