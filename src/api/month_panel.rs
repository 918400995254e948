use crate::core::{
    AxisTransform, DateRange, Orientation, Point, Rect, Viewport, segment_index,
};

/// Spacing between adjacent month ticks along the panel's mini-axis.
pub const MONTH_TICK_SPACING_PX: f64 = 18.0;
/// Panel extent across its mini-axis.
pub const PANEL_THICKNESS_PX: f64 = 28.0;

/// Floating month picker for one hovered year.
///
/// Renders as 12 month ticks on a mini-axis anchored next to the timeline
/// axis. The panel keeps its own local hover once the pointer is over it;
/// that local value takes precedence over the coarse month estimate the
/// parent derives from the axis position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPanel {
    year: i32,
    range: DateRange,
    bounds: Rect,
    transform: AxisTransform,
    orientation: Orientation,
    local_hover: Option<u32>,
}

impl MonthPanel {
    /// Lays the panel out next to `anchor`, offset away from the axis body by
    /// `margin_px` and clamped into the viewport along the main axis.
    pub(crate) fn new(
        year: i32,
        range: DateRange,
        anchor: Point,
        orientation: Orientation,
        reversed: bool,
        margin_px: f64,
        viewport: Viewport,
    ) -> Option<Self> {
        let length = 12.0 * MONTH_TICK_SPACING_PX;
        let bounds = match orientation {
            Orientation::Horizontal => {
                let max_x = (f64::from(viewport.width) - length).max(0.0);
                let x = (anchor.x - length / 2.0).clamp(0.0, max_x);
                let y = (anchor.y - margin_px - PANEL_THICKNESS_PX).max(0.0);
                Rect::new(x, y, length, PANEL_THICKNESS_PX)
            }
            Orientation::Vertical => {
                let max_y = (f64::from(viewport.height) - length).max(0.0);
                let y = (anchor.y - length / 2.0).clamp(0.0, max_y);
                let x = (anchor.x - margin_px - PANEL_THICKNESS_PX).max(0.0);
                Rect::new(x, y, PANEL_THICKNESS_PX, length)
            }
        };
        let (origin, extent) = match orientation {
            Orientation::Horizontal => (bounds.x, bounds.width),
            Orientation::Vertical => (bounds.y, bounds.height),
        };
        let transform = AxisTransform::new(orientation, reversed, origin, extent).ok()?;
        Some(Self {
            year,
            range,
            bounds,
            transform,
            orientation,
            local_hover: None,
        })
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn bounds(self) -> Rect {
        self.bounds
    }

    /// Month `m` (0-based) is disabled when `(year, m + 1)` falls outside the
    /// bounding range at month granularity.
    #[must_use]
    pub fn month_disabled(self, month_index: u32) -> bool {
        month_index > 11 || !self.range.contains_month(self.year, month_index + 1)
    }

    /// Center of a month tick in pixel space.
    #[must_use]
    pub fn tick_center(self, month_index: u32) -> Point {
        let ratio = (f64::from(month_index.min(11)) + 0.5) / 12.0;
        let along = self.transform.ratio_to_coord(ratio);
        match self.orientation {
            Orientation::Horizontal => Point::new(along, self.bounds.y + self.bounds.height / 2.0),
            Orientation::Vertical => Point::new(self.bounds.x + self.bounds.width / 2.0, along),
        }
    }

    /// Pointer sample over the panel; updates and returns local month hover.
    ///
    /// Points outside the panel clear local hover and return `None`.
    pub fn on_pointer_move(&mut self, point: Point) -> Option<u32> {
        if !self.bounds.contains(point) {
            self.local_hover = None;
            return None;
        }
        let ratio = self.transform.pointer_to_ratio(point);
        let month = segment_index(ratio, 12) as u32;
        self.local_hover = Some(month);
        Some(month)
    }

    pub fn on_pointer_leave(&mut self) {
        self.local_hover = None;
    }

    pub(crate) fn set_local_hover(&mut self, month_index: Option<u32>) {
        self.local_hover = month_index.map(|month| month.min(11));
    }

    #[must_use]
    pub fn local_hover(self) -> Option<u32> {
        self.local_hover
    }

    /// Local panel hover wins over the parent's coarse axis estimate.
    #[must_use]
    pub fn hover_month(self, forwarded: Option<u32>) -> Option<u32> {
        self.local_hover.or(forwarded)
    }

    /// Activation: `Some(month_index)` when selectable, `None` when disabled.
    #[must_use]
    pub fn activate(self, month_index: u32) -> Option<u32> {
        if self.month_disabled(month_index) {
            None
        } else {
            Some(month_index)
        }
    }
}
