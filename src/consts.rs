use crate::date::DateValue;
use crate::types::{Month, Weekday};

/// Earliest date accepted, as it appears on the wire.
///
/// Britain and its colonies switched to the Gregorian calendar in
/// September 1752, so the first full Gregorian month is October 1752.
pub const PIVOT_DATE_STR: &str = "1752-10-01";

/// Earliest date accepted (`1752-10-01`)
pub const PIVOT_DATE: DateValue = DateValue {
    year: 1752,
    month: Month::October,
    day: 1,
};

/// Weekday that `PIVOT_DATE` falls on
pub const PIVOT_DAY: Weekday = Weekday::Sunday;

/// Months that always have 31 days
pub const MONTHS_WITH_31_DAYS: [Month; 7] = [
    Month::January,
    Month::March,
    Month::May,
    Month::July,
    Month::August,
    Month::October,
    Month::December,
];

/// Days in February outside of a leap year
pub const FEBRUARY_DAYS: i32 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;
/// Days in the short (April, June, September, November) months
pub const SHORT_MONTH_DAYS: i32 = 30;
/// Days in the long months
pub const LONG_MONTH_DAYS: i32 = 31;

/// Largest day number the coarse range check lets through
pub const MAX_DAY: i32 = 31;
/// First day of month, used for lower bounds and normalisation
pub const MIN_DAY: i32 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: i32 = 12;

/// Days in a non-leap year
pub(crate) const DAYS_IN_YEAR: i64 = 365;
/// Days in a week
pub(crate) const DAYS_IN_WEEK: i64 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Rows (weeks) in a calendar grid
pub const GRID_ROWS: usize = 6;
/// Columns (Sunday..Saturday) in a calendar grid
pub const GRID_COLS: usize = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
