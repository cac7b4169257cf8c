use crate::consts::DATE_SEPARATOR;
use crate::prelude::*;
use crate::types::Month;
use crate::InvalidDateFormat;
use std::str::FromStr;

/// A `(year, month, day)` triple parsed from a `YYYY-MM-DD` string.
///
/// Parsing only checks the shape of the string and that the month exists.
/// Calendar rules (day bounds, leap years, the pivot date) are the job of
/// [`crate::validate`]. `day` is public so a date can be moved to the first
/// of its month in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, "month.value()", day)]
pub struct DateValue {
    pub(crate) year: i32,
    pub(crate) month: Month,
    pub day: i32,
}

impl DateValue {
    /// Builds a date from already-checked parts
    pub const fn new(year: i32, month: Month, day: i32) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }
}

/// Splits `date` into its three integer fields.
pub(crate) fn split_fields(date: &str) -> Result<(i32, i32, i32), InvalidDateFormat> {
    let parts: Vec<&str> = date.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(InvalidDateFormat::MissingSeparators(date.to_owned()));
    };

    match (
        year.parse::<i32>(),
        month.parse::<i32>(),
        day.parse::<i32>(),
    ) {
        (Ok(y), Ok(m), Ok(d)) => Ok((y, m, d)),
        _ => Err(InvalidDateFormat::NotInteger {
            year: (*year).to_owned(),
            month: (*month).to_owned(),
            day: (*day).to_owned(),
        }),
    }
}

impl FromStr for DateValue {
    type Err = InvalidDateFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_fields(s)?;
        Ok(Self {
            year,
            month: Month::new(month)?,
            day,
        })
    }
}

impl serde::Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
