// Rust guideline compliant 2026-10-19

//! Clock- and zone-bound boundary computations.
//!
//! A [`Schedule`] pairs a [`Clock`] with the [`Zone`] that defines the local
//! calendar, so callers can ask for "the next day" without threading both
//! through every call. Tests inject a [`timestamps_core::FixedClock`].

use crate::error::Result;
use chrono::{FixedOffset, Local};
use timestamps_core::format::to_utc_datetime;
use timestamps_core::{boundary, format, Clock, Config, Instant, SystemClock};

/// Offset rule used for local calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host's local time zone rules, including DST.
    #[default]
    Host,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl Zone {
    /// Picks the zone described by the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config.fixed_offset().map_or(Zone::Host, Zone::Fixed)
    }
}

/// Boundary helpers bound to a clock and a zone.
#[derive(Debug, Clone)]
pub struct Schedule<C: Clock = SystemClock> {
    clock: C,
    zone: Zone,
}

impl Schedule<SystemClock> {
    /// Schedule on the system clock in the host's time zone.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock, Zone::Host)
    }
}

impl<C: Clock> Schedule<C> {
    /// Creates a schedule from a clock and a zone.
    #[must_use]
    pub fn new(clock: C, zone: Zone) -> Self {
        Self { clock, zone }
    }

    /// Creates a schedule whose zone comes from the configuration.
    #[must_use]
    pub fn from_config(clock: C, config: &Config) -> Self {
        Self::new(clock, Zone::from_config(config))
    }

    /// Returns the configured zone.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Reads the clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Returns the next exact UTC hour after now.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary is not representable.
    pub fn next_hour(&self) -> Result<Instant> {
        let now = self.now();
        let next = boundary::next_hour(now)?;
        tracing::debug!(%now, %next, "computed next hour");
        Ok(next)
    }

    /// Returns the start of the next local calendar day.
    ///
    /// # Errors
    ///
    /// Returns an error if the next day is outside the calendar range.
    pub fn next_day(&self) -> Result<Instant> {
        let now = self.now();
        let next = match self.zone {
            Zone::Host => boundary::next_day_in(now, &Local)?,
            Zone::Fixed(offset) => boundary::next_day_in(now, &offset)?,
        };
        tracing::debug!(%now, %next, zone = ?self.zone, "computed next day");
        Ok(next)
    }

    /// Returns the next minute mark for `interval_minutes` after now.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval does not divide 60.
    pub fn next_minute_mark(&self, interval_minutes: u32) -> Result<Instant> {
        let now = self.now();
        let next = boundary::next_minute_mark(now, interval_minutes)?;
        tracing::debug!(%now, %next, interval_minutes, "computed next minute mark");
        Ok(next)
    }

    /// Checks whether now is within the first minute of a local hour.
    ///
    /// # Errors
    ///
    /// Returns an error if now is outside the calendar range.
    pub fn is_first_minute_of_hour(&self) -> Result<bool> {
        let utc = to_utc_datetime(self.now())?;
        Ok(match self.zone {
            Zone::Host => boundary::is_first_minute_of_hour(&utc.with_timezone(&Local)),
            Zone::Fixed(offset) => boundary::is_first_minute_of_hour(&utc.with_timezone(&offset)),
        })
    }

    /// Formats an instant in the zone, with milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the local year is outside 0000-9999.
    pub fn to_local_string(&self, instant: Instant) -> Result<String> {
        Ok(match self.zone {
            Zone::Host => format::to_local_string_in(instant, &Local)?,
            Zone::Fixed(offset) => format::to_local_string_in(instant, &offset)?,
        })
    }

    /// Formats an instant in the zone, without milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the local year is outside 0000-9999.
    pub fn to_local_string_secs(&self, instant: Instant) -> Result<String> {
        Ok(match self.zone {
            Zone::Host => format::to_local_string_secs_in(instant, &Local)?,
            Zone::Fixed(offset) => format::to_local_string_secs_in(instant, &offset)?,
        })
    }
}
