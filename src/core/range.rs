use serde::{Deserialize, Serialize};

use crate::core::CalendarDate;
use crate::error::{PickerError, PickerResult};

/// Inclusive `[start, end]` span bounding the selectable timeline.
///
/// The end defaults to "today" when unspecified. Years enumerated by the
/// range are `start.year()..=end.year()` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Builds a range; `end` falls back to today when `None`.
    ///
    /// Rejects `start > end` instead of producing an empty year sequence.
    pub fn new(start: CalendarDate, end: Option<CalendarDate>) -> PickerResult<Self> {
        let end = end.unwrap_or_else(CalendarDate::today);
        if start > end {
            return Err(PickerError::configuration(format!(
                "start date {:04}-{:02}-{:02} is after end date {:04}-{:02}-{:02}",
                start.year(),
                start.month(),
                start.day(),
                end.year(),
                end.month(),
                end.day()
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> CalendarDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> CalendarDate {
        self.end
    }

    /// Number of years spanned, always at least 1.
    #[must_use]
    pub fn year_count(self) -> usize {
        (self.end.year() - self.start.year()) as usize + 1
    }

    /// Year at `index` counted from the range start, `None` when out of bounds.
    #[must_use]
    pub fn year_at(self, index: usize) -> Option<i32> {
        if index < self.year_count() {
            Some(self.start.year() + index as i32)
        } else {
            None
        }
    }

    #[must_use]
    pub fn years(self) -> std::ops::RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// Month-granularity containment: `(year, month)` is inside the range iff
    /// the first of that month is neither before the start month nor after
    /// the end month.
    #[must_use]
    pub fn contains_month(self, year: i32, month: u32) -> bool {
        if !(1..=12).contains(&month) {
            return false;
        }
        let ordinal = i64::from(year) * 12 + i64::from(month) - 1;
        let start = i64::from(self.start.year()) * 12 + i64::from(self.start.month()) - 1;
        let end = i64::from(self.end.year()) * 12 + i64::from(self.end.month()) - 1;
        ordinal >= start && ordinal <= end
    }
}
