use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{PickerError, PickerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Pure mapping between a logical axis ratio and a screen coordinate.
///
/// The transform is selected once from configuration and owns all
/// orientation/reversal branching, so layout and hit-test code can work in
/// logical `[0, 1]` space throughout. A logical ratio of 0 always means the
/// range start (the earliest year) regardless of `reversed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    orientation: Orientation,
    reversed: bool,
    origin_px: f64,
    length_px: f64,
}

impl AxisTransform {
    pub fn new(
        orientation: Orientation,
        reversed: bool,
        origin_px: f64,
        length_px: f64,
    ) -> PickerResult<Self> {
        if !origin_px.is_finite() || !length_px.is_finite() || length_px <= 0.0 {
            return Err(PickerError::InvalidData(
                "axis origin must be finite and length finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            orientation,
            reversed,
            origin_px,
            length_px,
        })
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn reversed(self) -> bool {
        self.reversed
    }

    #[must_use]
    pub fn origin_px(self) -> f64 {
        self.origin_px
    }

    #[must_use]
    pub fn length_px(self) -> f64 {
        self.length_px
    }

    /// Extracts the along-axis component of a pointer position.
    #[must_use]
    pub fn along_coord(self, point: Point) -> f64 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Maps a pointer position to a logical ratio in `[0, 1]`.
    ///
    /// Coordinates outside the axis extent clamp to the nearest end, so the
    /// result never leaves the unit interval.
    #[must_use]
    pub fn pointer_to_ratio(self, point: Point) -> f64 {
        let coord = self.along_coord(point);
        let raw = ((coord - self.origin_px) / self.length_px).clamp(0.0, 1.0);
        if self.reversed { 1.0 - raw } else { raw }
    }

    /// Maps a logical ratio back to an along-axis pixel coordinate.
    #[must_use]
    pub fn ratio_to_coord(self, ratio: f64) -> f64 {
        let ratio = ratio.clamp(0.0, 1.0);
        let geometric = if self.reversed { 1.0 - ratio } else { ratio };
        self.origin_px + geometric * self.length_px
    }

    /// Clamps an along-axis coordinate into the axis extent.
    #[must_use]
    pub fn clamp_coord(self, coord: f64) -> f64 {
        coord.clamp(self.origin_px, self.origin_px + self.length_px)
    }
}

/// Maps a logical ratio to an index into `segment_count` equal segments.
///
/// The last segment absorbs `ratio == 1.0`, so the result is always within
/// `[0, segment_count - 1]` for a non-zero count.
#[must_use]
pub fn segment_index(ratio: f64, segment_count: usize) -> usize {
    if segment_count == 0 {
        return 0;
    }
    let scaled = ratio.clamp(0.0, 1.0) * segment_count as f64;
    (scaled.floor() as usize).min(segment_count - 1)
}

/// Position of `ratio` within its segment, in `[0, 1)`.
#[must_use]
pub fn position_within_segment(ratio: f64, segment_count: usize) -> f64 {
    if segment_count == 0 {
        return 0.0;
    }
    let scaled = ratio.clamp(0.0, 1.0) * segment_count as f64;
    let index = segment_index(ratio, segment_count) as f64;
    (scaled - index).clamp(0.0, 1.0)
}
