use smallvec::SmallVec;

use crate::core::CalendarDate;
use crate::error::{PickerError, PickerResult};

/// Structural week layout for one month.
///
/// The grid orders days starting from a configurable `first_day_of_week`
/// (`0 = Sunday .. 6 = Saturday`) and pads with leading/trailing blanks so
/// every row is a complete week. Blanks are `None` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    first_day_of_week: u32,
    leading_blanks: u32,
    day_count: u32,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32, first_day_of_week: u32) -> PickerResult<Self> {
        if first_day_of_week > 6 {
            return Err(PickerError::configuration(format!(
                "first_day_of_week must be 0..=6, got {first_day_of_week}"
            )));
        }
        let first = CalendarDate::first_of_month(year, month)?;
        let leading_blanks = (first.weekday_index() + 7 - first_day_of_week) % 7;
        Ok(Self {
            year,
            month,
            first_day_of_week,
            leading_blanks,
            day_count: CalendarDate::days_in_month(year, month),
        })
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn leading_blanks(self) -> u32 {
        self.leading_blanks
    }

    #[must_use]
    pub fn day_count(self) -> u32 {
        self.day_count
    }

    #[must_use]
    pub fn week_count(self) -> usize {
        ((self.leading_blanks + self.day_count) as usize).div_ceil(7)
    }

    /// Cells in row-major order; blanks are `None`. Length is always a
    /// multiple of 7. Up to four weeks stay inline; longer months spill.
    #[must_use]
    pub fn cells(self) -> SmallVec<[Option<u32>; 32]> {
        let mut cells = SmallVec::new();
        for _ in 0..self.leading_blanks {
            cells.push(None);
        }
        for day in 1..=self.day_count {
            cells.push(Some(day));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    /// Weekday indices (`0 = Sunday`) of the seven columns, left to right.
    #[must_use]
    pub fn weekday_columns(self) -> [u32; 7] {
        let mut columns = [0u32; 7];
        for (offset, column) in columns.iter_mut().enumerate() {
            *column = (self.first_day_of_week + offset as u32) % 7;
        }
        columns
    }
}
