use approx::assert_abs_diff_eq;
use datepick_rs::api::{TimelineConfig, TimelineSelector, MAX_FULLY_LABELED_YEARS};
use datepick_rs::core::{CalendarDate, Viewport};
use datepick_rs::render::NullRenderer;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid date")
}

fn selector_for_years(start: i32, end: i32) -> TimelineSelector<NullRenderer> {
    let config = TimelineConfig::new(Viewport::new(1000, 200), date(start, 1, 1))
        .with_end_date(date(end, 12, 31));
    TimelineSelector::new(NullRenderer::default(), config).expect("selector init")
}

#[test]
fn idle_scene_validates_and_has_one_tick_per_year() {
    let selector = selector_for_years(2020, 2024);
    let frame = selector.build_scene();
    frame.validate().expect("frame geometry");

    // Axis line plus one tick per year.
    assert_eq!(frame.lines.len(), 1 + 5);
    assert!(frame.rects.is_empty());
}

#[test]
fn small_ranges_label_every_year() {
    let selector = selector_for_years(2020, 2024);
    let frame = selector.build_scene();
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["2020", "2021", "2022", "2023", "2024"]);
}

#[test]
fn large_ranges_label_only_first_and_last_year() {
    let selector = selector_for_years(1990, 2024);
    assert!(selector.range().year_count() > MAX_FULLY_LABELED_YEARS);
    let frame = selector.build_scene();
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["1990", "2024"]);
}

#[test]
fn hover_adds_panel_rect_and_month_ticks() {
    let mut selector = selector_for_years(2020, 2024);
    let bounds = selector.axis_bounds();
    selector.pointer_move(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);

    let panel_bounds = selector.popup_bounds().expect("panel open");
    let frame = selector.build_scene();
    frame.validate().expect("frame geometry");

    assert_eq!(frame.rects.len(), 1);
    let rect = &frame.rects[0];
    assert_abs_diff_eq!(rect.x, panel_bounds.x, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.y, panel_bounds.y, epsilon = 1e-9);

    // Axis line, year ticks, and twelve month ticks.
    assert_eq!(frame.lines.len(), 1 + 5 + 12);

    // Year labels plus the hovered-month header.
    assert_eq!(frame.texts.len(), 5 + 1);
}

#[test]
fn leaving_and_expiring_removes_the_panel_from_the_scene() {
    let mut selector = selector_for_years(2020, 2024);
    let bounds = selector.axis_bounds();
    selector.pointer_move(bounds.x + 10.0, bounds.y + bounds.height / 2.0);
    selector.pointer_leave(100.0);
    assert!(selector.poll(100.2));

    let frame = selector.build_scene();
    assert!(frame.rects.is_empty());
    assert_eq!(frame.lines.len(), 1 + 5);
}

#[test]
fn null_renderer_records_frame_counts() {
    let mut selector = selector_for_years(2020, 2024);
    selector.render().expect("render");
    let renderer = selector.into_renderer();
    assert_eq!(renderer.last_line_count, 6);
    assert_eq!(renderer.last_rect_count, 0);
    assert_eq!(renderer.last_text_count, 5);
}
