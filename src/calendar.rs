//! Calendar arithmetic used by the calculator.

use crate::prelude::*;
use crate::types::Weekday;
use chrono::{Datelike, Days};

/// Date arithmetic over a fixed calendar system with a Sunday-first week.
pub trait Calendar {
    /// Whole calendar days between two dates, regardless of their order
    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> u64;

    /// Whole completed years between two dates, regardless of their order
    fn years_between(&self, from: NaiveDate, to: NaiveDate) -> u32;

    fn weekday_of(&self, date: NaiveDate) -> Weekday;

    fn add_days(&self, date: NaiveDate, days: u64) -> NaiveDate;
}

impl<K: Calendar + ?Sized> Calendar for &K {
    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> u64 {
        (**self).days_between(from, to)
    }

    fn years_between(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        (**self).years_between(from, to)
    }

    fn weekday_of(&self, date: NaiveDate) -> Weekday {
        (**self).weekday_of(date)
    }

    fn add_days(&self, date: NaiveDate, days: u64) -> NaiveDate {
        (**self).add_days(date, days)
    }
}

/// Proleptic Gregorian calendar backed by chrono.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianCalendar;

impl Calendar for GregorianCalendar {
    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> u64 {
        to.signed_duration_since(from).num_days().unsigned_abs()
    }

    fn years_between(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        let (earlier, later) = if from <= to { (from, to) } else { (to, from) };
        // Only `None` when the base is later, which the ordering above rules out
        later.years_since(earlier).unwrap_or_default()
    }

    fn weekday_of(&self, date: NaiveDate) -> Weekday {
        date.weekday().into()
    }

    /// Saturates at `NaiveDate::MAX`.
    fn add_days(&self, date: NaiveDate, days: u64) -> NaiveDate {
        date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
    }
}
