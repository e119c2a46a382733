//! Sources of "today".

use crate::prelude::*;
use chrono::{TimeZone, Utc};

/// Abstraction over the current date so results are reproducible in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall clock. "Today" is the current date in the configured timezone (UTC by default).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock<Tz: TimeZone = Utc> {
    timezone: Tz,
}

impl SystemClock {
    pub const fn new() -> Self {
        Self { timezone: Utc }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> SystemClock<Tz> {
    /// Wall clock that reports the date as observed in `timezone`
    pub const fn with_timezone(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub const fn timezone(&self) -> &Tz {
        &self.timezone
    }
}

impl<Tz: TimeZone> Clock for SystemClock<Tz> {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
