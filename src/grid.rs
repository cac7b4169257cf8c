//! Month-view calendar grid.
//!
//! A grid is always 6 weeks of 7 days, Sunday first. Cells before the first
//! of the month hold the tail of the previous month and cells after the last
//! day hold the start of the next one, the way a paper calendar page does.

use crate::consts::{GRID_COLS, GRID_ROWS, PIVOT_DATE, PIVOT_DAY};
use crate::date::DateValue;
use crate::math::{actual_days_in_month, num_days_between_dates};
use crate::prelude::*;
use crate::types::Weekday;
use crate::validate::validate;
use crate::InvalidDateFormat;
use serde::Serialize;
use tracing::info;

/// Day-of-month numbers laid out as weeks (rows) by weekday (columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, Serialize)]
#[serde(transparent)]
pub struct CalendarGrid([[i32; GRID_COLS]; GRID_ROWS]);

impl CalendarGrid {
    /// Returns the rows of the grid
    pub const fn rows(&self) -> &[[i32; GRID_COLS]; GRID_ROWS] {
        &self.0
    }

    /// All 42 cells in reading order
    pub fn cells(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().flatten().copied()
    }
}

/// Row-major write position that wraps to the next week after Saturday.
struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    const fn is_full(&self) -> bool {
        self.row >= GRID_ROWS
    }

    fn write(&mut self, cells: &mut [[i32; GRID_COLS]; GRID_ROWS], day: i32) {
        cells[self.row][self.col] = day;
        self.col += 1;
        if self.col == GRID_COLS {
            self.row += 1;
            self.col = 0;
        }
    }
}

/// Builds the grid for the month containing `date`.
///
/// # Errors
/// Returns `InvalidDateFormat` if `date` fails validation against
/// [`PIVOT_DATE`].
pub fn build(date: &str) -> Result<CalendarGrid, InvalidDateFormat> {
    build_with_pivot(date, &PIVOT_DATE, PIVOT_DAY)
}

/// Builds the grid for the month containing `date`, anchoring weekdays on
/// `pivot` falling on `pivot_day`.
///
/// # Errors
/// Returns `InvalidDateFormat` if `date` fails validation against `pivot`.
pub fn build_with_pivot(
    date: &str,
    pivot: &DateValue,
    pivot_day: Weekday,
) -> Result<CalendarGrid, InvalidDateFormat> {
    info!(date, "computing date matrix");
    validate(date, pivot)?;

    let mut first: DateValue = date.parse()?;
    first.day = 1;

    let diff = num_days_between_dates(pivot, &first);
    let first_weekday = Weekday::from_offset(i64::from(pivot_day.value()) + diff);
    let first_col = usize::from(first_weekday.value());

    let mut cells = [[0; GRID_COLS]; GRID_ROWS];

    // Tail of the previous month, filled right to left.
    let mut prev_day = actual_days_in_month(first.month.previous(), first.year);
    for col in (0..first_col).rev() {
        cells[0][col] = prev_day;
        prev_day -= 1;
    }

    let mut cursor = Cursor {
        row: 0,
        col: first_col,
    };
    for day in 1..=actual_days_in_month(first.month, first.year) {
        cursor.write(&mut cells, day);
    }

    let mut next_day = 1;
    while !cursor.is_full() {
        cursor.write(&mut cells, next_day);
        next_day += 1;
    }

    let grid = CalendarGrid(cells);
    info!(%first, %first_weekday, ?grid, "computed date matrix");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_leap_year;
    use crate::types::Month;

    #[test]
    fn test_build_february_2022() {
        let grid = build("2022-02-28").unwrap();
        assert_eq!(
            *grid.rows(),
            [
                [30, 31, 1, 2, 3, 4, 5],
                [6, 7, 8, 9, 10, 11, 12],
                [13, 14, 15, 16, 17, 18, 19],
                [20, 21, 22, 23, 24, 25, 26],
                [27, 28, 1, 2, 3, 4, 5],
                [6, 7, 8, 9, 10, 11, 12],
            ]
        );
    }

    #[test]
    fn test_build_leap_february() {
        let grid = build("2020-02-28").unwrap();
        assert_eq!(
            *grid.rows(),
            [
                [26, 27, 28, 29, 30, 31, 1],
                [2, 3, 4, 5, 6, 7, 8],
                [9, 10, 11, 12, 13, 14, 15],
                [16, 17, 18, 19, 20, 21, 22],
                [23, 24, 25, 26, 27, 28, 29],
                [1, 2, 3, 4, 5, 6, 7],
            ]
        );
    }

    #[test]
    fn test_build_month_starting_on_sunday() {
        let grid = build("2020-03-28").unwrap();
        assert_eq!(
            *grid.rows(),
            [
                [1, 2, 3, 4, 5, 6, 7],
                [8, 9, 10, 11, 12, 13, 14],
                [15, 16, 17, 18, 19, 20, 21],
                [22, 23, 24, 25, 26, 27, 28],
                [29, 30, 31, 1, 2, 3, 4],
                [5, 6, 7, 8, 9, 10, 11],
            ]
        );
    }

    #[test]
    fn test_build_far_future() {
        let grid = build("2385-07-07").unwrap();
        assert_eq!(
            *grid.rows(),
            [
                [30, 1, 2, 3, 4, 5, 6],
                [7, 8, 9, 10, 11, 12, 13],
                [14, 15, 16, 17, 18, 19, 20],
                [21, 22, 23, 24, 25, 26, 27],
                [28, 29, 30, 31, 1, 2, 3],
                [4, 5, 6, 7, 8, 9, 10],
            ]
        );
    }

    #[test]
    fn test_build_four_week_february_still_has_six_rows() {
        // February 2015 starts on a Sunday and fills exactly four weeks.
        let grid = build("2015-02-10").unwrap();
        assert_eq!(grid.rows()[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(grid.rows()[3], [22, 23, 24, 25, 26, 27, 28]);
        assert_eq!(grid.rows()[4], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(grid.rows()[5], [8, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_build_january_shows_december_tail() {
        // The previous month of January is December, not an invalid month 0.
        let grid = build("2022-01-15").unwrap();
        assert_eq!(
            *grid.rows(),
            [
                [26, 27, 28, 29, 30, 31, 1],
                [2, 3, 4, 5, 6, 7, 8],
                [9, 10, 11, 12, 13, 14, 15],
                [16, 17, 18, 19, 20, 21, 22],
                [23, 24, 25, 26, 27, 28, 29],
                [30, 31, 1, 2, 3, 4, 5],
            ]
        );
    }

    #[test]
    fn test_build_pivot_month() {
        let grid = build("1752-10-01").unwrap();
        assert_eq!(grid.len(), GRID_ROWS);
        assert_eq!(grid[0], [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_build_propagates_validation_error() {
        let result = build("2022-13-15");
        assert!(matches!(result, Err(InvalidDateFormat::MonthOutOfRange(13))));

        let result = build("1752-09-30");
        assert!(matches!(result, Err(InvalidDateFormat::BeforePivot { .. })));
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = build("2022-02-28").unwrap();
        let b = build("2022-02-28").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_ignores_day_of_month() {
        assert_eq!(build("2022-02-01").unwrap(), build("2022-02-28").unwrap());
    }

    #[test]
    fn test_build_with_custom_pivot() {
        // 2000-01-01 was a Saturday.
        let pivot: DateValue = "2000-01-01".parse().unwrap();
        let grid = build_with_pivot("2000-01-20", &pivot, Weekday::Saturday).unwrap();
        assert_eq!(grid.rows()[0], [26, 27, 28, 29, 30, 31, 1]);
        assert_eq!(grid, build("2000-01-20").unwrap());
    }

    #[test]
    fn test_current_month_is_contiguous() {
        for year in [1752, 1800, 1900, 2000, 2020, 2021, 2022, 2100, 2400, 3000] {
            for month in Month::ALL {
                if year == 1752 && month < Month::October {
                    continue;
                }
                let date = format!("{year}-{}-1", month.value());
                let grid = build(&date).unwrap();
                let cells: Vec<i32> = grid.cells().collect();
                assert_eq!(cells.len(), GRID_ROWS * GRID_COLS);

                let start = cells.iter().position(|&d| d == 1).unwrap();
                assert!(start < GRID_COLS, "{date}: month must start in the first week");

                let days = actual_days_in_month(month, year);
                let expected: Vec<i32> = (1..=days).collect();
                let len = usize::try_from(days).unwrap();
                assert_eq!(cells[start..start + len], expected[..], "{date}");

                if month == Month::February {
                    assert_eq!(days == 29, is_leap_year(year), "{date}");
                }
            }
        }
    }

    #[test]
    fn test_first_column_matches_weekday() {
        // 2026-10-01 is a Thursday.
        let grid = build("2026-10-19").unwrap();
        assert_eq!(grid.rows()[0], [27, 28, 29, 30, 1, 2, 3]);
        assert_eq!(grid.rows()[4], [25, 26, 27, 28, 29, 30, 31]);
    }

    #[test]
    fn test_serialize_as_nested_arrays() {
        let grid = build("2022-02-28").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[30,31,1,2,3,4,5],[6,7,8,9,10,11,12],"));
        let parsed: Vec<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), GRID_ROWS);
        assert!(parsed.iter().all(|row| row.len() == GRID_COLS));
    }
}
