/// Age (in whole years) at which a person stops being `Young`
pub const ADULT_AGE: u32 = 18;

/// Last age (in whole years) still classified as `Adult`
pub const SENIOR_AFTER_AGE: u32 = 60;

/// Days in one calendar week
pub const DAYS_IN_WEEK: u64 = 7;

/// Weekday names in calendar order, Sunday first.
/// Index matches `Weekday::num_days_from_sunday`.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Date format accepted when constructing from text (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
