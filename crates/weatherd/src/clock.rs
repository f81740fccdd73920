//! Wall-clock time source.
//!
//! The date/time line on the display wants calendar time, which on the
//! target hardware only exists after NTP sync. The trait keeps that
//! "may be unavailable" shape.

use chrono::{Local, NaiveDateTime};

pub trait WallClock: Send + Sync {
    /// Current local calendar time, or `None` while no time source is
    /// available.
    fn now(&self) -> Option<NaiveDateTime>;
}

/// System time, always available on a host target.
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> Option<NaiveDateTime> {
        Some(Local::now().naive_local())
    }
}

/// Fixed time source for tests.
pub struct FixedClock(pub Option<NaiveDateTime>);

impl WallClock for FixedClock {
    fn now(&self) -> Option<NaiveDateTime> {
        self.0
    }
}
