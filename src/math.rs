//! Gregorian day arithmetic.
//!
//! Day counts are measured on an absolute scale where every date maps to
//! `year * 365 + day + <days in the preceding months> + <leap days so far>`.
//! Only differences on that scale are meaningful.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_YEAR, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, LONG_MONTH_DAYS, MONTHS_WITH_31_DAYS, SHORT_MONTH_DAYS,
};
use crate::date::DateValue;
use crate::types::Month;
use tracing::debug;

/// Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Days in `month` ignoring leap years (February is always 28).
pub fn default_days_in_month(month: Month) -> i32 {
    if MONTHS_WITH_31_DAYS.contains(&month) {
        LONG_MONTH_DAYS
    } else if month == Month::February {
        FEBRUARY_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}

/// Days in `month` of `year`, with February at 29 in leap years.
pub fn actual_days_in_month(month: Month, year: i32) -> i32 {
    if month == Month::February && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        default_days_in_month(month)
    }
}

/// Number of leap years before `date`.
///
/// The current year only counts once its February is over, i.e. from March on.
pub fn count_leap_years(date: &DateValue) -> i64 {
    let mut year = i64::from(date.year);
    if date.month <= Month::February {
        year -= 1;
    }

    let count = year.div_euclid(i64::from(LEAP_YEAR_CYCLE))
        - year.div_euclid(i64::from(CENTURY_CYCLE))
        + year.div_euclid(i64::from(GREGORIAN_CYCLE));
    debug!(%date, count, "counted leap years until date");
    count
}

/// Position of `date` on the absolute day scale.
fn absolute_days(date: &DateValue) -> i64 {
    let preceding: i64 = date
        .month
        .preceding()
        .map(|m| i64::from(default_days_in_month(m)))
        .sum();

    i64::from(date.year) * DAYS_IN_YEAR + i64::from(date.day) + preceding + count_leap_years(date)
}

/// Signed number of days from `base` to `actual`.
///
/// Negative when `actual` precedes `base`.
pub fn num_days_between_dates(base: &DateValue, actual: &DateValue) -> i64 {
    let base_days = absolute_days(base);
    let actual_days = absolute_days(actual);
    let diff = actual_days - base_days;
    debug!(%base, %actual, diff, "computed days between dates");
    diff
}
