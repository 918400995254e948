use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::events::{SelectionEmitter, SelectionEvent, SelectionObserver};
use crate::api::grid_config::GridConfig;
use crate::api::style::PickerStyle;
use crate::core::{CalendarDate, MonthGrid, Viewport};
use crate::error::PickerResult;
use crate::locale::{DefaultLocaleFormatter, LocaleFormatter};
use crate::render::{RenderFrame, Renderer};

/// Keyboard input recognized by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridKey {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// One cell of the rendered month grid. Blanks have `date = None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub day: Option<u32>,
    pub date: Option<CalendarDate>,
    pub enabled: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_focused: bool,
}

/// Month-grid date picker.
///
/// Displays one month at a time; navigation steps the visible month/year.
/// Day activation (pointer or Enter/Space on the focused day) emits the date
/// unless the widget is disabled or the day falls outside `[min, max]`.
/// A clear action emits `DateSelected(None)`.
pub struct GridCalendar<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    min_date: Option<CalendarDate>,
    max_date: Option<CalendarDate>,
    disabled: bool,
    first_day_of_week: u32,
    locale: String,
    visible_year: i32,
    visible_month: u32,
    focused_day: u32,
    selected: Option<CalendarDate>,
    today: CalendarDate,
    emitter: SelectionEmitter,
    formatter: Box<dyn LocaleFormatter>,
    style: PickerStyle,
}

impl<R: Renderer> GridCalendar<R> {
    pub fn new(renderer: R, config: GridConfig) -> PickerResult<Self> {
        config.validate()?;
        let today = CalendarDate::today();
        let seed = config.selected.unwrap_or(today);
        Ok(Self {
            renderer,
            viewport: config.viewport,
            min_date: config.min_date,
            max_date: config.max_date,
            disabled: config.disabled,
            first_day_of_week: config.first_day_of_week,
            locale: config.locale,
            visible_year: seed.year(),
            visible_month: seed.month(),
            focused_day: seed.day(),
            selected: config.selected,
            today,
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
    pub fn visible(&self) -> (i32, u32) {
        (self.visible_year, self.visible_month)
    }

    #[must_use]
    pub fn focused_day(&self) -> u32 {
        self.focused_day
    }

    #[must_use]
    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Host-pushed selection value; never mutated by the widget itself.
    pub fn set_selected(&mut self, selected: Option<CalendarDate>) {
        self.selected = selected;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
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

    pub fn set_on_change(&mut self, callback: impl FnMut(SelectionEvent) + 'static) {
        self.emitter.set_callback(Box::new(callback));
    }

    pub fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.emitter.add_observer(observer);
    }

    pub fn next_month(&mut self) {
        self.step_view_months(1);
    }

    pub fn prev_month(&mut self) {
        self.step_view_months(-1);
    }

    pub fn next_year(&mut self) {
        self.step_view_months(12);
    }

    pub fn prev_year(&mut self) {
        self.step_view_months(-12);
    }

    /// Structural layout of the visible month.
    pub fn month_grid(&self) -> PickerResult<MonthGrid> {
        MonthGrid::new(self.visible_year, self.visible_month, self.first_day_of_week)
    }

    /// Cells in row-major order, padded to complete weeks.
    pub fn cells(&self) -> PickerResult<Vec<GridCell>> {
        let grid = self.month_grid()?;
        Ok(grid
            .cells()
            .iter()
            .map(|slot| match slot {
                None => GridCell {
                    day: None,
                    date: None,
                    enabled: false,
                    is_today: false,
                    is_selected: false,
                    is_focused: false,
                },
                Some(day) => {
                    let date = CalendarDate::new(self.visible_year, self.visible_month, *day).ok();
                    GridCell {
                        day: Some(*day),
                        date,
                        enabled: date.is_some_and(|date| self.day_enabled(date)),
                        is_today: date == Some(self.today),
                        is_selected: date.is_some() && date == self.selected,
                        is_focused: *day == self.focused_day,
                    }
                }
            })
            .collect())
    }

    /// Whether a day is selectable under the widget-disabled flag and the
    /// `[min, max]` bounds.
    #[must_use]
    pub fn day_enabled(&self, date: CalendarDate) -> bool {
        if self.disabled {
            return false;
        }
        if self.min_date.is_some_and(|min| date < min) {
            return false;
        }
        if self.max_date.is_some_and(|max| date > max) {
            return false;
        }
        true
    }

    /// Pointer activation of a day in the visible month.
    ///
    /// Emits and returns the date when selectable; `None` otherwise.
    pub fn activate_day(&mut self, day: u32) -> Option<CalendarDate> {
        let date = CalendarDate::new(self.visible_year, self.visible_month, day).ok()?;
        if !self.day_enabled(date) {
            return None;
        }
        self.focused_day = day;
        debug!(
            year = date.year(),
            month = date.month(),
            day = date.day(),
            "grid: day selected"
        );
        self.emitter.emit(SelectionEvent::DateSelected(Some(date)));
        Some(date)
    }

    /// Keyboard input on the focused day.
    ///
    /// Arrows move focus within the visible month (clamped at its edges);
    /// Enter/Space activates the focused day.
    pub fn key_press(&mut self, key: GridKey) -> Option<CalendarDate> {
        match key {
            GridKey::Enter | GridKey::Space => self.activate_day(self.focused_day),
            GridKey::ArrowLeft => {
                self.move_focus(-1);
                None
            }
            GridKey::ArrowRight => {
                self.move_focus(1);
                None
            }
            GridKey::ArrowUp => {
                self.move_focus(-7);
                None
            }
            GridKey::ArrowDown => {
                self.move_focus(7);
                None
            }
        }
    }

    /// Explicit clear affordance; emits `DateSelected(None)`.
    pub fn clear_selection(&mut self) {
        if self.disabled {
            return;
        }
        debug!("grid: selection cleared");
        self.emitter.emit(SelectionEvent::DateSelected(None));
    }

    pub fn build_scene(&self) -> PickerResult<RenderFrame> {
        super::grid_scene_builder::build(self)
    }

    pub fn render(&mut self) -> PickerResult<()> {
        let frame = self.build_scene()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn step_view_months(&mut self, delta: i32) {
        let anchor = CalendarDate::first_of_month(self.visible_year, self.visible_month);
        let Ok(anchor) = anchor else {
            return;
        };
        let stepped = anchor.step_months(delta);
        self.visible_year = stepped.year();
        self.visible_month = stepped.month();
        let day_count = CalendarDate::days_in_month(self.visible_year, self.visible_month).max(1);
        self.focused_day = self.focused_day.min(day_count);
    }

    fn move_focus(&mut self, delta: i32) {
        let day_count =
            i64::from(CalendarDate::days_in_month(self.visible_year, self.visible_month).max(1));
        let target = (i64::from(self.focused_day) + i64::from(delta)).clamp(1, day_count);
        self.focused_day = target as u32;
    }
}
