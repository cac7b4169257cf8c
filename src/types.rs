use std::fmt;

use crate::InvalidDateFormat;
use crate::consts::DAYS_IN_WEEK;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A month of the Gregorian year, valued 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks a month up by its number.
    ///
    /// # Errors
    /// Returns `InvalidDateFormat::MonthOutOfRange` for anything outside `1..=12`.
    pub fn new(value: i32) -> Result<Self, InvalidDateFormat> {
        Ok(match value {
            1 => Self::January,
            2 => Self::February,
            3 => Self::March,
            4 => Self::April,
            5 => Self::May,
            6 => Self::June,
            7 => Self::July,
            8 => Self::August,
            9 => Self::September,
            10 => Self::October,
            11 => Self::November,
            12 => Self::December,
            _ => return Err(InvalidDateFormat::MonthOutOfRange(value)),
        })
    }

    /// Returns the month number (1-12)
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Upper-case English name, as shown in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }

    /// Month before this one. January wraps around to December.
    pub const fn previous(self) -> Self {
        match self {
            Self::January => Self::December,
            Self::February => Self::January,
            Self::March => Self::February,
            Self::April => Self::March,
            Self::May => Self::April,
            Self::June => Self::May,
            Self::July => Self::June,
            Self::August => Self::July,
            Self::September => Self::August,
            Self::October => Self::September,
            Self::November => Self::October,
            Self::December => Self::November,
        }
    }

    /// Months strictly before this one in the same year
    pub fn preceding(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().take_while(move |m| *m != self)
    }
}

impl TryFrom<i32> for Month {
    type Error = InvalidDateFormat;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Month> for i32 {
    fn from(month: Month) -> Self {
        month.value()
    }
}

/// A day of the week, valued 0 (Sunday) through 6 (Saturday).
///
/// The value doubles as the column index in a calendar grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "u8")]
pub enum Weekday {
    #[display(fmt = "SUNDAY")]
    Sunday = 0,
    #[display(fmt = "MONDAY")]
    Monday = 1,
    #[display(fmt = "TUESDAY")]
    Tuesday = 2,
    #[display(fmt = "WEDNESDAY")]
    Wednesday = 3,
    #[display(fmt = "THURSDAY")]
    Thursday = 4,
    #[display(fmt = "FRIDAY")]
    Friday = 5,
    #[display(fmt = "SATURDAY")]
    Saturday = 6,
}

impl Weekday {
    /// Looks a weekday up by its number, Sunday being 0.
    ///
    /// # Errors
    /// Returns `InvalidDateFormat::WeekdayOutOfRange` for anything outside `0..=6`.
    pub fn new(value: i32) -> Result<Self, InvalidDateFormat> {
        Ok(match value {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return Err(InvalidDateFormat::WeekdayOutOfRange(value)),
        })
    }

    /// Weekday for an arbitrary day offset, reduced modulo 7.
    pub const fn from_offset(offset: i64) -> Self {
        match offset.rem_euclid(DAYS_IN_WEEK) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the weekday number (0-6)
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i32> for Weekday {
    type Error = InvalidDateFormat;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.value()
    }
}
