use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// A calendar date truncated to day granularity.
///
/// Equality and ordering are by `(year, month, day)`. Constructors validate
/// against the proleptic Gregorian calendar, so every value of this type
/// names a real day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Unvalidated wire shape; deserialization funnels through [`CalendarDate::new`]
/// so deserialized values honor the same calendar invariants as constructed ones.
#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = PickerError;

    fn try_from(raw: RawCalendarDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl CalendarDate {
    /// Builds a date, rejecting month/day combinations that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> PickerResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(PickerError::configuration(format!(
                "date {year:04}-{month:02}-{day:02} does not exist"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Builds the first day of `(year, month)`.
    pub fn first_of_month(year: i32, month: u32) -> PickerResult<Self> {
        Self::new(year, month, 1)
    }

    /// Today's date in the host's local timezone.
    #[must_use]
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-based month, `1..=12`.
    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    /// 1-based day of month.
    #[must_use]
    pub fn day(self) -> u32 {
        self.day
    }

    /// Month ordinal on a single integer axis, used for month-granularity
    /// comparisons across year boundaries.
    #[must_use]
    pub fn month_ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Weekday index with `0 = Sunday .. 6 = Saturday`.
    #[must_use]
    pub fn weekday_index(self) -> u32 {
        self.as_naive().weekday().num_days_from_sunday()
    }

    /// Number of days in `(year, month)`.
    #[must_use]
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        match (first, next) {
            (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
            _ => 0,
        }
    }

    /// Steps by whole months, clamping the day to the target month's length.
    #[must_use]
    pub fn step_months(self, delta: i32) -> Self {
        let ordinal = self.month_ordinal() + i64::from(delta);
        let year = ordinal.div_euclid(12) as i32;
        let month = (ordinal.rem_euclid(12) + 1) as u32;
        let day = self.day.min(Self::days_in_month(year, month).max(1));
        Self { year, month, day }
    }

    /// Steps by whole years, clamping Feb 29 to Feb 28 when needed.
    #[must_use]
    pub fn step_years(self, delta: i32) -> Self {
        let year = self.year + delta;
        let day = self.day.min(Self::days_in_month(year, self.month).max(1));
        Self {
            year,
            month: self.month,
            day,
        }
    }

    fn as_naive(self) -> NaiveDate {
        // Constructors guarantee validity.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }
}
