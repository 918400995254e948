use serde::{Deserialize, Serialize};

use crate::core::{CalendarDate, Viewport};
use crate::error::{PickerError, PickerResult};
use crate::locale::DEFAULT_LOCALE;

/// Construction parameters for [`GridCalendar`](super::GridCalendar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub viewport: Viewport,
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    /// Disables the whole widget: no day is selectable.
    pub disabled: bool,
    /// `0 = Sunday .. 6 = Saturday`.
    pub first_day_of_week: u32,
    pub locale: String,
    /// Initial selected value; also seeds the visible month.
    pub selected: Option<CalendarDate>,
}

impl GridConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            min_date: None,
            max_date: None,
            disabled: false,
            first_day_of_week: 0,
            locale: DEFAULT_LOCALE.to_owned(),
            selected: None,
        }
    }

    #[must_use]
    pub fn with_min_date(mut self, min_date: CalendarDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    #[must_use]
    pub fn with_max_date(mut self, max_date: CalendarDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, first_day_of_week: u32) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: Option<CalendarDate>) -> Self {
        self.selected = selected;
        self
    }

    /// Serializes the config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PickerError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes a config from JSON.
    pub fn from_json_str(input: &str) -> PickerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PickerError::InvalidData(format!("failed to parse config: {e}")))
    }

    pub(crate) fn validate(&self) -> PickerResult<()> {
        if !self.viewport.is_valid() {
            return Err(PickerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.first_day_of_week > 6 {
            return Err(PickerError::configuration(format!(
                "first_day_of_week must be 0..=6, got {}",
                self.first_day_of_week
            )));
        }
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(PickerError::configuration(
                    "min_date must not be after max_date",
                ));
            }
        }
        Ok(())
    }
}
