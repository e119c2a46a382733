mod calendar;
mod clock;
mod consts;
mod prelude;
mod types;

pub use calendar::{Calendar, GregorianCalendar};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use types::{AgeCategory, BirthDate, Weekday};

use crate::prelude::*;
use tracing::{debug, trace};

/// Invalid input supplied to the calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// Birth date is later than today.
    #[error("Provided date of birth {birth_date} is in the future (today is {today})")]
    FutureBirthDate {
        birth_date: NaiveDate,
        today: NaiveDate,
    },

    /// Name is not one of `Sunday` .. `Saturday`.
    #[error("Provided day {0:?} is not a valid weekday name")]
    UnrecognizedWeekday(String),

    /// Text is not an ISO `YYYY-MM-DD` date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Computes facts about a date of birth relative to the clock's "today".
///
/// The birth date is checked once, at construction. Every query reads the
/// clock again, so a long-lived value keeps answering for the current day.
#[derive(Debug, Clone)]
pub struct BirthdayFacts<C = SystemClock, K = GregorianCalendar> {
    birth_date: BirthDate,
    clock: C,
    calendar: K,
}

impl BirthdayFacts {
    /// Uses the UTC wall clock and the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `InvalidInput::FutureBirthDate` if `date` is after today.
    pub fn from_date(date: NaiveDate) -> Result<Self, InvalidInput> {
        Self::new(date, SystemClock::new(), GregorianCalendar)
    }
}

impl<C: Clock, K: Calendar> BirthdayFacts<C, K> {
    /// # Errors
    /// Returns `InvalidInput::FutureBirthDate` if `date` is after `clock.today()`.
    pub fn new(date: NaiveDate, clock: C, calendar: K) -> Result<Self, InvalidInput> {
        let today = clock.today();
        let birth_date = BirthDate::new(date, today).inspect_err(|_| {
            debug!(birth_date = %date, %today, "rejected birth date in the future");
        })?;
        debug!(%birth_date, %today, "accepted birth date");
        Ok(Self {
            birth_date,
            clock,
            calendar,
        })
    }

    /// Parses an ISO `YYYY-MM-DD` date, then validates it like [`Self::new`].
    ///
    /// # Errors
    /// Returns `InvalidInput::InvalidDate` for malformed text and
    /// `InvalidInput::FutureBirthDate` for a date after today.
    pub fn parse(text: &str, clock: C, calendar: K) -> Result<Self, InvalidInput> {
        let date = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map_err(|err| InvalidInput::InvalidDate(format!("{text:?}: {err}")))?;
        Self::new(date, clock, calendar)
    }

    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    /// Whole completed years between the birth date and today
    pub fn age_in_years(&self) -> u32 {
        self.calendar.years_between(self.birth_date.get(), self.clock.today())
    }

    /// Plain calendar days between the birth date and today (0 when born today)
    pub fn days_lived(&self) -> u64 {
        self.calendar.days_between(self.birth_date.get(), self.clock.today())
    }

    pub fn classify_age(&self) -> AgeCategory {
        AgeCategory::from_age(self.age_in_years())
    }

    /// `Young`, `Adult` or `Senior`
    pub fn plain_text_age(&self) -> &'static str {
        self.classify_age().as_str()
    }

    /// Counts how many times `target` has come around since the birth date.
    ///
    /// Whole weeks lived contribute one occurrence each. The leftover days
    /// contribute one more when the weekday reached after them is `target` or
    /// comes later in the Sunday-first week. When the days lived are an exact
    /// multiple of seven the whole-week count is returned for any `target`,
    /// and the leftover comparison does not wrap past Saturday.
    pub fn count_weekday(&self, target: Weekday) -> u64 {
        let birth = self.birth_date.get();
        let total_days = self.calendar.days_between(birth, self.clock.today());
        if total_days == 0 {
            return 0;
        }

        let full_weeks = total_days / DAYS_IN_WEEK;
        let extra_days = total_days % DAYS_IN_WEEK;
        if extra_days == 0 {
            trace!(%target, total_days, full_weeks, "days lived are whole weeks");
            return full_weeks;
        }

        let last_extra = self
            .calendar
            .weekday_of(self.calendar.add_days(birth, extra_days));
        let count = if last_extra == target || last_extra.is_after(target) {
            full_weeks + 1
        } else {
            full_weeks
        };
        trace!(
            %target,
            total_days,
            full_weeks,
            extra_days,
            %last_extra,
            count,
            "counted weekday occurrences"
        );
        count
    }

    /// [`Self::count_weekday`] for a weekday given by name (`"Monday"`).
    ///
    /// # Errors
    /// Returns `InvalidInput::UnrecognizedWeekday` if `name` is not an exact weekday name.
    pub fn count_weekday_named(&self, name: &str) -> Result<u64, InvalidInput> {
        let target = name.parse::<Weekday>()?;
        Ok(self.count_weekday(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn facts(birth: NaiveDate, today: NaiveDate) -> BirthdayFacts<FixedClock> {
        BirthdayFacts::new(birth, FixedClock::new(today), GregorianCalendar).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let f = facts(date(2024, 9, 29), date(2024, 10, 8));
        assert_eq!(f.classify_age(), AgeCategory::Young);
        assert_eq!(f.plain_text_age(), "Young");
        assert_eq!(f.count_weekday(Weekday::Monday), 2);
        assert_eq!(f.count_weekday_named("Monday").unwrap(), 2);
        assert_eq!(f.days_lived(), 9);
    }

    #[test]
    fn test_reference_scenario_other_weekdays() {
        // Sunday 2024-09-29 to Tuesday 2024-10-08: one full week plus Mon, Tue
        let f = facts(date(2024, 9, 29), date(2024, 10, 8));
        assert_eq!(f.count_weekday(Weekday::Sunday), 2);
        assert_eq!(f.count_weekday(Weekday::Tuesday), 2);
        assert_eq!(f.count_weekday(Weekday::Wednesday), 1);
        assert_eq!(f.count_weekday(Weekday::Saturday), 1);
    }

    #[test]
    fn test_born_today() {
        let today = date(2024, 10, 8);
        let f = facts(today, today);
        assert_eq!(f.classify_age(), AgeCategory::Young);
        assert_eq!(f.age_in_years(), 0);
        for day in Weekday::ALL {
            assert_eq!(f.count_weekday(day), 0, "{day}");
        }
        assert_eq!(f.count_weekday_named("Friday").unwrap(), 0);
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let today = date(2024, 10, 8);
        let result =
            BirthdayFacts::new(date(2024, 10, 9), FixedClock::new(today), GregorianCalendar);
        assert!(matches!(
            result,
            Err(InvalidInput::FutureBirthDate { birth_date, today: t })
                if birth_date == date(2024, 10, 9) && t == today
        ));
    }

    #[test]
    fn test_adult_boundary() {
        let today = date(2024, 10, 8);
        assert_eq!(facts(date(2006, 10, 8), today).classify_age(), AgeCategory::Adult);
        assert_eq!(facts(date(2006, 10, 9), today).classify_age(), AgeCategory::Young);
    }

    #[test]
    fn test_senior_boundary() {
        let today = date(2024, 10, 8);
        assert_eq!(facts(date(1963, 10, 8), today).classify_age(), AgeCategory::Senior);
        assert_eq!(facts(date(1964, 10, 8), today).classify_age(), AgeCategory::Adult);
        assert_eq!(facts(date(1963, 10, 9), today).classify_age(), AgeCategory::Adult);
    }

    #[test]
    fn test_whole_weeks_ignore_target() {
        // Sunday to Sunday, exactly three weeks: every target gets the whole-week count
        let f = facts(date(2024, 9, 29), date(2024, 10, 20));
        for day in Weekday::ALL {
            assert_eq!(f.count_weekday(day), 3, "{day}");
        }
    }

    #[test]
    fn test_extra_days_do_not_wrap_past_saturday() {
        // Born Friday 2024-10-04. One day later the leftover reaches Saturday.
        let born_friday = date(2024, 10, 4);
        let f = facts(born_friday, date(2024, 10, 5));
        assert_eq!(f.count_weekday(Weekday::Saturday), 1);

        // Two days later the leftover reaches Sunday, which is not after Saturday,
        // so the Saturday already lived is no longer counted.
        let f = facts(born_friday, date(2024, 10, 6));
        assert_eq!(f.count_weekday(Weekday::Saturday), 0);
        assert_eq!(f.count_weekday(Weekday::Sunday), 1);
    }

    #[test]
    fn test_unrecognized_weekday() {
        let f = facts(date(1991, 8, 15), date(2024, 10, 8));
        let result = f.count_weekday_named("Someday");
        assert_eq!(
            result,
            Err(InvalidInput::UnrecognizedWeekday("Someday".to_owned()))
        );
        assert!(f.count_weekday_named("monday").is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        let clock = FixedClock::new(date(2024, 10, 8));
        let f = BirthdayFacts::parse("2024-09-29", clock, GregorianCalendar).unwrap();
        assert_eq!(f.birth_date().get(), date(2024, 9, 29));
        assert_eq!(f.count_weekday(Weekday::Monday), 2);
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        let clock = FixedClock::new(date(2024, 10, 8));
        for bad in ["", "29/09/2024", "2024-02-30", "yesterday"] {
            let result = BirthdayFacts::parse(bad, clock, GregorianCalendar);
            assert!(
                matches!(result, Err(InvalidInput::InvalidDate(_))),
                "{bad:?} should be rejected"
            );
        }
        let result = BirthdayFacts::parse("2030-01-01", clock, GregorianCalendar);
        assert!(matches!(result, Err(InvalidInput::FutureBirthDate { .. })));
    }

    #[test]
    fn test_borrowed_collaborators() {
        let clock = FixedClock::new(date(2024, 10, 8));
        let calendar = GregorianCalendar;
        let f = BirthdayFacts::new(date(2024, 9, 29), &clock, &calendar).unwrap();
        assert_eq!(f.count_weekday(Weekday::Monday), 2);
    }

    #[test]
    fn test_from_date_uses_wall_clock() {
        let f = BirthdayFacts::from_date(date(2000, 1, 1)).unwrap();
        assert!(f.age_in_years() >= 24);
        assert!(BirthdayFacts::from_date(NaiveDate::MAX).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = InvalidInput::FutureBirthDate {
            birth_date: date(2030, 1, 1),
            today: date(2024, 10, 8),
        };
        assert_eq!(
            err.to_string(),
            "Provided date of birth 2030-01-01 is in the future (today is 2024-10-08)"
        );
        let err = InvalidInput::UnrecognizedWeekday("Funday".to_owned());
        assert_eq!(err.to_string(), r#"Provided day "Funday" is not a valid weekday name"#);
    }
}
