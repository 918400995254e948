use tracing::debug;

use crate::api::events::{SelectionEmitter, SelectionEvent, SelectionObserver};
use crate::api::month_panel::MonthPanel;
use crate::api::style::PickerStyle;
use crate::api::timeline_config::TimelineConfig;
use crate::core::{
    AxisTransform, CalendarDate, DateRange, Orientation, Point, Rect, Viewport,
    position_within_segment, segment_index,
};
use crate::error::PickerResult;
use crate::interaction::{HoverSnapshot, HoverState};
use crate::locale::{DefaultLocaleFormatter, LocaleFormatter};
use crate::render::{RenderFrame, Renderer};

/// Pointer-driven year/month timeline selector.
///
/// The selector maps a 1-D pointer coordinate along a configurable axis to a
/// calendar year, pre-seeds a coarse month estimate within that year, and
/// surfaces a floating [`MonthPanel`] near the hover point. Selection flows
/// out through the emitted [`SelectionEvent`] only; the host owns the
/// selected value and passes it back in via [`set_selected`].
///
/// [`set_selected`]: TimelineSelector::set_selected
pub struct TimelineSelector<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    range: DateRange,
    transform: AxisTransform,
    axis_cross_px: f64,
    hover_band_px: f64,
    popup_margin_px: f64,
    locale: String,
    hover: HoverState,
    panel: Option<MonthPanel>,
    selected: Option<CalendarDate>,
    emitter: SelectionEmitter,
    formatter: Box<dyn LocaleFormatter>,
    style: PickerStyle,
}

impl<R: Renderer> TimelineSelector<R> {
    pub fn new(renderer: R, config: TimelineConfig) -> PickerResult<Self> {
        config.validate()?;
        let range = DateRange::new(config.start_date, config.end_date)?;

        let (axis_extent, cross_extent) = match config.orientation {
            Orientation::Horizontal => {
                (f64::from(config.viewport.width), f64::from(config.viewport.height))
            }
            Orientation::Vertical => {
                (f64::from(config.viewport.height), f64::from(config.viewport.width))
            }
        };
        let transform = AxisTransform::new(
            config.orientation,
            config.reversed,
            config.axis_inset_px,
            axis_extent - 2.0 * config.axis_inset_px,
        )?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            range,
            transform,
            axis_cross_px: cross_extent / 2.0,
            hover_band_px: config.hover_band_px,
            popup_margin_px: config.popup_margin_px,
            locale: config.locale,
            hover: HoverState::new(config.close_delay_seconds),
            panel: None,
            selected: config.selected,
            emitter: SelectionEmitter::new(),
            formatter: Box::new(DefaultLocaleFormatter),
            style: PickerStyle::default(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn range(&self) -> DateRange {
        self.range
    }

    #[must_use]
    pub fn transform(&self) -> AxisTransform {
        self.transform
    }

    #[must_use]
    pub fn axis_cross_px(&self) -> f64 {
        self.axis_cross_px
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn style(&self) -> PickerStyle {
        self.style
    }

    pub fn set_style(&mut self, style: PickerStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn formatter(&self) -> &dyn LocaleFormatter {
        self.formatter.as_ref()
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn LocaleFormatter>) {
        self.formatter = formatter;
    }

    #[must_use]
    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Host-pushed selection value; never mutated by the widget itself.
    pub fn set_selected(&mut self, selected: Option<CalendarDate>) {
        self.selected = selected;
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(SelectionEvent) + 'static) {
        self.emitter.set_callback(Box::new(callback));
    }

    pub fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.emitter.add_observer(observer);
    }

    #[must_use]
    pub fn hover_snapshot(&self) -> HoverSnapshot {
        self.hover.snapshot()
    }

    #[must_use]
    pub fn hovered_year(&self) -> Option<i32> {
        self.hover.hovered_year()
    }

    /// Effective hovered month: panel-local hover wins over the coarse axis
    /// estimate once the pointer interacts with the panel directly.
    #[must_use]
    pub fn hovered_month(&self) -> Option<u32> {
        match self.panel {
            Some(panel) => panel.hover_month(self.hover.hovered_month()),
            None => self.hover.hovered_month(),
        }
    }

    #[must_use]
    pub fn month_panel(&self) -> Option<&MonthPanel> {
        self.panel.as_ref()
    }

    /// Interactive band around the axis line.
    #[must_use]
    pub fn axis_bounds(&self) -> Rect {
        let half_band = self.hover_band_px / 2.0;
        match self.transform.orientation() {
            Orientation::Horizontal => Rect::new(
                self.transform.origin_px(),
                self.axis_cross_px - half_band,
                self.transform.length_px(),
                self.hover_band_px,
            ),
            Orientation::Vertical => Rect::new(
                self.axis_cross_px - half_band,
                self.transform.origin_px(),
                self.hover_band_px,
                self.transform.length_px(),
            ),
        }
    }

    #[must_use]
    pub fn popup_bounds(&self) -> Option<Rect> {
        self.panel.map(MonthPanel::bounds)
    }

    /// One tick per year: `(year, along-axis pixel coordinate)` pairs at the
    /// center of each year's segment.
    #[must_use]
    pub fn year_tick_coords(&self) -> Vec<(i32, f64)> {
        let count = self.range.year_count();
        (0..count)
            .filter_map(|index| {
                let year = self.range.year_at(index)?;
                let ratio = (index as f64 + 0.5) / count as f64;
                Some((year, self.transform.ratio_to_coord(ratio)))
            })
            .collect()
    }

    /// Pointer sample over the axis band.
    ///
    /// Clamps the coordinate into the axis extent, derives the hovered year
    /// and a coarse month estimate, and moves the popup anchor with the raw
    /// cursor position. Always cancels a pending close. While the popup is
    /// pinned the sample does not move hover or the panel.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        if !point.is_finite() {
            return;
        }

        let ratio = self.transform.pointer_to_ratio(point);
        let count = self.range.year_count();
        let year_index = segment_index(ratio, count);
        let Some(year) = self.range.year_at(year_index) else {
            return;
        };
        let month_index = segment_index(position_within_segment(ratio, count), 12) as u32;

        let along = self.transform.clamp_coord(self.transform.along_coord(point));
        let anchor = match self.transform.orientation() {
            Orientation::Horizontal => Point::new(along, self.axis_cross_px),
            Orientation::Vertical => Point::new(self.axis_cross_px, along),
        };

        let was_pinned = self.hover.is_popup_pinned();
        self.hover.on_axis_move(year, month_index, anchor);
        if !was_pinned {
            self.sync_panel();
        }
    }

    /// Pointer left the axis band: arms the grace deadline.
    pub fn pointer_leave(&mut self, now: f64) {
        self.hover.on_axis_leave(now);
    }

    /// Pointer entered the popup: pins it, cancelling any pending close.
    pub fn popup_enter(&mut self) {
        self.hover.on_popup_enter();
    }

    /// Pointer sample over the popup while pinned; refines month hover.
    pub fn popup_pointer_move(&mut self, x: f64, y: f64) {
        if !self.hover.is_popup_pinned() {
            return;
        }
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        if let Some(month) = panel.on_pointer_move(Point::new(x, y)) {
            self.hover.set_popup_month(month);
        }
    }

    /// Pointer left the popup: hover clears immediately.
    pub fn popup_leave(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            panel.on_pointer_leave();
        }
        self.hover.on_popup_leave();
        self.sync_panel();
    }

    /// Drives the pending close deadline; returns `true` when hover cleared.
    pub fn poll(&mut self, now: f64) -> bool {
        let fired = self.hover.poll(now);
        if fired {
            self.panel = None;
        }
        fired
    }

    /// Global pointer press. A press outside both the axis band and the
    /// popup force-clears hover; presses inside are handled by the regular
    /// pointer paths and ignored here.
    pub fn global_pointer_down(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        if !point.is_finite() {
            return;
        }
        if self.axis_bounds().contains(point) {
            return;
        }
        if let Some(bounds) = self.popup_bounds() {
            if bounds.contains(point) {
                return;
            }
        }
        self.hover.on_outside_press();
        self.panel = None;
    }

    /// Commits the month activation coming from the panel.
    ///
    /// Combines the 0-based `month_index` with the currently hovered year
    /// into the first of that month, emits it, and returns the emitted date.
    /// No-op (`None`) when nothing is hovered or the month is disabled.
    pub fn select_month(&mut self, month_index: u32) -> Option<CalendarDate> {
        let year = self.hover.hovered_year()?;
        let panel = self.panel.as_ref()?;
        let month_index = panel.activate(month_index)?;
        let date = CalendarDate::first_of_month(year, month_index + 1).ok()?;
        debug!(year, month = month_index + 1, "timeline: month selected");
        self.emitter.emit(SelectionEvent::DateSelected(Some(date)));
        Some(date)
    }

    pub fn build_scene(&self) -> RenderFrame {
        super::timeline_scene_builder::build(self)
    }

    pub fn render(&mut self) -> PickerResult<()> {
        let frame = self.build_scene();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn sync_panel(&mut self) {
        let Some(year) = self.hover.hovered_year() else {
            self.panel = None;
            return;
        };
        // Carry local hover across anchor-only moves within the same year.
        let local = self
            .panel
            .filter(|panel| panel.year() == year)
            .and_then(MonthPanel::local_hover);
        self.panel = MonthPanel::new(
            year,
            self.range,
            self.hover.anchor(),
            self.transform.orientation(),
            self.transform.reversed(),
            self.popup_margin_px,
            self.viewport,
        )
        .map(|mut panel| {
            panel.set_local_hover(local);
            panel
        });
    }
}
