//! Checks a raw `YYYY-MM-DD` string against calendar rules.

use crate::consts::{
    FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, MAX_DAY, MAX_MONTH, MIN_DAY, MONTHS_WITH_31_DAYS,
};
use crate::date::{DateValue, split_fields};
use crate::math::{is_leap_year, num_days_between_dates};
use crate::types::Month;
use crate::InvalidDateFormat;
use tracing::info;

/// Validates `date` and checks it is not earlier than `pivot`.
///
/// Checks run in a fixed order and the first failure is returned:
/// field count, integer fields, month range, day range, February length,
/// 30-day months, and finally the pivot date.
///
/// # Errors
/// Returns the `InvalidDateFormat` variant describing the first rule broken.
pub fn validate(date: &str, pivot: &DateValue) -> Result<(), InvalidDateFormat> {
    info!(date, "validating date");

    let (year, month, day) =
        split_fields(date).inspect_err(|e| info!(date, error = %e, "malformed date"))?;

    if !(1..=MAX_MONTH).contains(&month) {
        info!(date, month, "month out of range");
        return Err(InvalidDateFormat::MonthOutOfRange(month));
    }

    // Lower bound is 1: a day 0 would otherwise pass every later check.
    if !(MIN_DAY..=MAX_DAY).contains(&day) {
        info!(date, day, "day out of range");
        return Err(InvalidDateFormat::DayOutOfRange(day));
    }

    let month = Month::new(month)?;
    if month == Month::February {
        let leap = is_leap_year(year);
        let limit = if leap { FEBRUARY_DAYS_LEAP } else { FEBRUARY_DAYS };
        if day > limit {
            info!(date, day, leap, "day out of range for February");
            return Err(InvalidDateFormat::FebruaryOverflow { day, leap });
        }
    } else if !MONTHS_WITH_31_DAYS.contains(&month) && day == MAX_DAY {
        info!(date, day, %month, "day out of range for 30-day month");
        return Err(InvalidDateFormat::ThirtyDayOverflow { day, month });
    }

    let parsed = DateValue::new(year, month, day);
    if num_days_between_dates(pivot, &parsed) < 0 {
        info!(date, %pivot, "date precedes the pivot date");
        return Err(InvalidDateFormat::BeforePivot {
            date: date.to_owned(),
            pivot: *pivot,
        });
    }

    Ok(())
}
