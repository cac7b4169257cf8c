//! Month-view calendar grids for Gregorian dates.
//!
//! [`build`] turns a `YYYY-MM-DD` string into a 6×7 [`CalendarGrid`] of day
//! numbers, rejecting anything that is not a real Gregorian date on or after
//! [`PIVOT_DATE`]. The [`api`] module serves the same thing over HTTP.

mod consts;
mod date;
mod grid;
mod math;
mod prelude;
mod types;
mod validate;

pub mod api;
pub mod config;

pub use consts::*;
pub use date::DateValue;
pub use grid::{CalendarGrid, build, build_with_pivot};
pub use math::{
    actual_days_in_month, count_leap_years, default_days_in_month, is_leap_year,
    num_days_between_dates,
};
pub use types::{Month, Weekday};
pub use validate::validate;

/// Why a date string was rejected.
///
/// The `Display` text is meant for end users and is returned verbatim in
/// HTTP 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateFormat {
    /// The string is not three `-`-separated fields.
    #[error("String {0} doesn't contain enough separators to specify year, month and day")]
    MissingSeparators(String),

    /// At least one field is not an integer.
    #[error("Year: {year} or month: {month} or day: {day} is/are not integer(s)")]
    NotInteger {
        year: String,
        month: String,
        day: String,
    },

    #[error("Given month {0} isn't between [1, 12]")]
    MonthOutOfRange(i32),

    #[error("Given weekday {0} isn't between [0, 6]")]
    WeekdayOutOfRange(i32),

    #[error("Given day: {0} isn't between [1, 31]")]
    DayOutOfRange(i32),

    /// Day past the end of February for that year.
    #[error(
        "Given day: {day} isn't between [1,{}] for a {}",
        february_limit(.leap),
        year_kind(.leap)
    )]
    FebruaryOverflow { day: i32, leap: bool },

    /// Day 31 in a month that only has 30.
    #[error("Given day: {day} isn't between [1, 30] for given month: {month}")]
    ThirtyDayOverflow { day: i32, month: Month },

    #[error("Given date: {date} should be greater or equal to {pivot}")]
    BeforePivot { date: String, pivot: DateValue },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn february_limit(leap: &bool) -> i32 {
    if *leap { FEBRUARY_DAYS_LEAP } else { FEBRUARY_DAYS }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn year_kind(leap: &bool) -> &'static str {
    if *leap { "leap year" } else { "non-leap year" }
}
