use approx::assert_abs_diff_eq;
use datepick_rs::api::{PANEL_THICKNESS_PX, TimelineConfig, TimelineSelector};
use datepick_rs::core::{CalendarDate, DateRange, Viewport};
use datepick_rs::render::NullRenderer;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid date")
}

fn bounded_selector() -> TimelineSelector<NullRenderer> {
    // 2020-01-01 ..= 2021-06-01, two years on the axis.
    let config = TimelineConfig::new(Viewport::new(1000, 200), date(2020, 1, 1))
        .with_end_date(date(2021, 6, 1));
    TimelineSelector::new(NullRenderer::default(), config).expect("selector init")
}

fn hover_year(selector: &mut TimelineSelector<NullRenderer>, index: usize, count: usize) {
    let transform = selector.transform();
    let x = transform.origin_px() + (index as f64 + 0.5) / count as f64 * transform.length_px();
    selector.pointer_move(x, 100.0);
}

#[test]
fn months_outside_range_are_disabled_at_month_granularity() {
    let range = DateRange::new(date(2020, 1, 1), Some(date(2021, 6, 1))).expect("range");
    assert!(!range.contains_month(2019, 12));
    assert!(range.contains_month(2020, 1));
    assert!(range.contains_month(2021, 6));
    assert!(!range.contains_month(2021, 7));
}

#[test]
fn panel_disables_trailing_months_of_end_year() {
    let mut selector = bounded_selector();
    hover_year(&mut selector, 1, 2);
    assert_eq!(selector.hovered_year(), Some(2021));
    let panel = selector.month_panel().expect("panel");
    // June (index 5) selectable, July (index 6) onward disabled.
    assert!(!panel.month_disabled(5));
    assert!(panel.month_disabled(6));
    assert!(panel.month_disabled(11));
    assert_eq!(panel.activate(6), None);
    assert_eq!(panel.activate(5), Some(5));
}

#[test]
fn panel_of_start_year_enables_all_months() {
    let mut selector = bounded_selector();
    hover_year(&mut selector, 0, 2);
    let panel = selector.month_panel().expect("panel");
    for month_index in 0..12 {
        assert!(!panel.month_disabled(month_index), "month {month_index}");
    }
}

#[test]
fn activating_disabled_month_emits_nothing() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut selector = bounded_selector();
    let emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);
    selector.set_on_change(move |event| sink.borrow_mut().push(event));

    hover_year(&mut selector, 1, 2);
    assert_eq!(selector.select_month(6), None);
    assert!(emitted.borrow().is_empty());
}

#[test]
fn panel_is_anchored_above_a_horizontal_axis() {
    let mut selector = bounded_selector();
    hover_year(&mut selector, 0, 2);
    let bounds = selector.popup_bounds().expect("popup bounds");
    let axis = selector.axis_bounds();
    assert!(bounds.y + bounds.height <= axis.y);
    assert_abs_diff_eq!(bounds.height, PANEL_THICKNESS_PX, epsilon = 1e-9);

    // Anchor tracks the raw cursor coordinate: the panel center follows x.
    let anchor_x = selector.hover_snapshot().anchor.x;
    assert_abs_diff_eq!(bounds.x + bounds.width / 2.0, anchor_x, epsilon = 1e-9);
}

#[test]
fn panel_clamps_into_the_viewport_near_axis_ends() {
    let mut selector = bounded_selector();
    selector.pointer_move(0.0, 100.0);
    let bounds = selector.popup_bounds().expect("popup bounds");
    assert!(bounds.x >= 0.0);

    selector.pointer_move(1000.0, 100.0);
    let bounds = selector.popup_bounds().expect("popup bounds");
    assert!(bounds.x + bounds.width <= 1000.0 + 1e-9);
}

#[test]
fn local_panel_hover_takes_precedence_over_coarse_estimate() {
    let mut selector = bounded_selector();
    hover_year(&mut selector, 0, 2);
    let coarse = selector.hovered_month().expect("coarse estimate");

    selector.popup_enter();
    let target = (coarse + 3) % 12;
    let tick = selector
        .month_panel()
        .expect("panel")
        .tick_center(target);
    selector.popup_pointer_move(tick.x, tick.y);
    assert_eq!(selector.hovered_month(), Some(target));

    // Leaving the popup drops both the pin and the refinement.
    selector.popup_leave();
    assert_eq!(selector.hovered_month(), None);
}

#[test]
fn month_tick_centers_stay_inside_panel_bounds() {
    let mut selector = bounded_selector();
    hover_year(&mut selector, 0, 2);
    let panel = *selector.month_panel().expect("panel");
    let bounds = panel.bounds();
    for month_index in 0..12 {
        let center = panel.tick_center(month_index);
        assert!(bounds.contains(center), "month {month_index}");
    }
}

#[test]
fn reversed_panel_orders_month_ticks_in_reverse() {
    let config = TimelineConfig::new(Viewport::new(1000, 200), date(2020, 1, 1))
        .with_end_date(date(2021, 6, 1))
        .with_reversed(true);
    let mut selector =
        TimelineSelector::new(NullRenderer::default(), config).expect("selector init");
    selector.pointer_move(500.0, 100.0);
    let panel = *selector.month_panel().expect("panel");
    // January sits at a larger x than December when reversed.
    assert!(panel.tick_center(0).x > panel.tick_center(11).x);
}
