// Rust guideline compliant 2026-10-19

//! Sources of the current instant.

use crate::format::from_datetime;
use crate::Instant;
use chrono::Utc;

/// Supplies the current instant.
///
/// This is the only side-effecting collaborator in the crate; inject a
/// [`FixedClock`] to make boundary computations deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Reads the host's real-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        from_datetime(&Utc::now())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
