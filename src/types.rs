use crate::consts::{ADULT_AGE, SENIOR_AFTER_AGE, WEEKDAY_NAMES};
use crate::InvalidInput;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named day of the week.
///
/// The declaration order is the calendar order, Sunday first, and the derived
/// `Ord` follows it. `is_after` is defined on that order and does not wrap
/// around from Saturday back to Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 0,
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday = 2,
    #[display(fmt = "Wednesday")]
    Wednesday = 3,
    #[display(fmt = "Thursday")]
    Thursday = 4,
    #[display(fmt = "Friday")]
    Friday = 5,
    #[display(fmt = "Saturday")]
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in calendar order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Position in the week, Sunday = 0 through Saturday = 6
    #[inline]
    pub const fn num_days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Returns the weekday name, e.g. `"Monday"`
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// True if `self` comes strictly later than `other` within one Sunday-first week.
    #[inline]
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }
}

impl FromStr for Weekday {
    type Err = InvalidInput;

    /// Parses an exact, case-sensitive weekday name (`"Sunday"` .. `"Saturday"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEEKDAY_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Self::ALL[index])
            .ok_or_else(|| InvalidInput::UnrecognizedWeekday(s.to_owned()))
    }
}

impl TryFrom<&str> for Weekday {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

/// Coarse life stage derived from whole years lived
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum AgeCategory {
    /// Under `ADULT_AGE`
    #[display(fmt = "Young")]
    Young,
    /// From `ADULT_AGE` up to and including `SENIOR_AFTER_AGE`
    #[display(fmt = "Adult")]
    Adult,
    /// Older than `SENIOR_AFTER_AGE`
    #[display(fmt = "Senior")]
    Senior,
}

impl AgeCategory {
    /// Classifies an age in whole completed years
    pub const fn from_age(years: u32) -> Self {
        if years < ADULT_AGE {
            Self::Young
        } else if years <= SENIOR_AFTER_AGE {
            Self::Adult
        } else {
            Self::Senior
        }
    }

    /// Plain-text label, identical to the `Display` output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Young => "Young",
            Self::Adult => "Adult",
            Self::Senior => "Senior",
        }
    }
}

/// A date of birth that was not in the future when it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{_0}")]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Creates a birth date, checking it against `today`
    ///
    /// # Errors
    /// Returns `InvalidInput::FutureBirthDate` if `date` is strictly after `today`.
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, InvalidInput> {
        if date > today {
            return Err(InvalidInput::FutureBirthDate {
                birth_date: date,
                today,
            });
        }
        Ok(Self(date))
    }

    /// Returns the underlying calendar date
    #[inline]
    pub const fn get(self) -> NaiveDate {
        self.0
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.0
    }
}
