use serde::{Deserialize, Serialize};

use crate::core::{CalendarDate, Orientation, Viewport};
use crate::error::{PickerError, PickerResult};
use crate::locale::DEFAULT_LOCALE;

/// Grace window between leaving the axis and clearing hover, in seconds.
pub const DEFAULT_CLOSE_DELAY_SECONDS: f64 = 0.15;

/// Construction parameters for [`TimelineSelector`](super::TimelineSelector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub viewport: Viewport,
    pub start_date: CalendarDate,
    /// Defaults to today when `None`.
    pub end_date: Option<CalendarDate>,
    pub orientation: Orientation,
    pub reversed: bool,
    pub locale: String,
    /// Initial selected value; the host remains the source of truth.
    pub selected: Option<CalendarDate>,
    pub close_delay_seconds: f64,
    /// Margin between the viewport edges and the axis ends.
    pub axis_inset_px: f64,
    /// Thickness of the interactive band around the axis line.
    pub hover_band_px: f64,
    /// Gap between the axis line and the month panel.
    pub popup_margin_px: f64,
}

impl TimelineConfig {
    #[must_use]
    pub fn new(viewport: Viewport, start_date: CalendarDate) -> Self {
        Self {
            viewport,
            start_date,
            end_date: None,
            orientation: Orientation::Horizontal,
            reversed: false,
            locale: DEFAULT_LOCALE.to_owned(),
            selected: None,
            close_delay_seconds: DEFAULT_CLOSE_DELAY_SECONDS,
            axis_inset_px: 24.0,
            hover_band_px: 24.0,
            popup_margin_px: 12.0,
        }
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: CalendarDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
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

    #[must_use]
    pub fn with_close_delay_seconds(mut self, close_delay_seconds: f64) -> Self {
        self.close_delay_seconds = close_delay_seconds;
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
        if !self.close_delay_seconds.is_finite() || self.close_delay_seconds < 0.0 {
            return Err(PickerError::configuration(
                "close delay must be finite and >= 0",
            ));
        }
        for (name, value) in [
            ("axis_inset_px", self.axis_inset_px),
            ("hover_band_px", self.hover_band_px),
            ("popup_margin_px", self.popup_margin_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PickerError::configuration(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        let axis_extent = match self.orientation {
            Orientation::Horizontal => f64::from(self.viewport.width),
            Orientation::Vertical => f64::from(self.viewport.height),
        };
        if axis_extent - 2.0 * self.axis_inset_px <= 0.0 {
            return Err(PickerError::configuration(
                "axis inset leaves no room for the axis",
            ));
        }

        Ok(())
    }
}
