use datepick_rs::api::{GridConfig, TimelineConfig, TimelineSelector};
use datepick_rs::core::{CalendarDate, Viewport};
use datepick_rs::render::NullRenderer;
use datepick_rs::{GridCalendar, PickerError};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid date")
}

#[test]
fn timeline_rejects_zero_sized_viewport() {
    let config = TimelineConfig::new(Viewport::new(0, 200), date(2020, 1, 1));
    let err = TimelineSelector::new(NullRenderer::default(), config)
        .err()
        .expect("must fail");
    assert!(matches!(err, PickerError::InvalidViewport { width: 0, .. }));
}

#[test]
fn timeline_rejects_range_start_after_end() {
    let config = TimelineConfig::new(Viewport::new(800, 200), date(2024, 6, 1))
        .with_end_date(date(2020, 1, 1));
    let err = TimelineSelector::new(NullRenderer::default(), config)
        .err()
        .expect("must fail");
    assert!(matches!(err, PickerError::InvalidConfiguration { .. }));
}

#[test]
fn timeline_end_date_defaults_to_today() {
    let config = TimelineConfig::new(Viewport::new(800, 200), date(2020, 1, 1));
    let selector = TimelineSelector::new(NullRenderer::default(), config).expect("selector");
    let today = CalendarDate::today();
    assert_eq!(
        selector.range().year_count(),
        (today.year() - 2020) as usize + 1
    );
}

#[test]
fn timeline_rejects_negative_close_delay() {
    let config = TimelineConfig::new(Viewport::new(800, 200), date(2020, 1, 1))
        .with_close_delay_seconds(-0.1);
    assert!(TimelineSelector::new(NullRenderer::default(), config).is_err());
}

#[test]
fn timeline_rejects_non_finite_close_delay() {
    for delay in [f64::NAN, f64::INFINITY] {
        let config = TimelineConfig::new(Viewport::new(800, 200), date(2020, 1, 1))
            .with_close_delay_seconds(delay);
        assert!(TimelineSelector::new(NullRenderer::default(), config).is_err());
    }
}

#[test]
fn timeline_rejects_inset_wider_than_viewport() {
    let mut config = TimelineConfig::new(Viewport::new(40, 200), date(2020, 1, 1));
    config.axis_inset_px = 20.0;
    assert!(TimelineSelector::new(NullRenderer::default(), config).is_err());
}

#[test]
fn zero_close_delay_is_accepted() {
    let config = TimelineConfig::new(Viewport::new(800, 200), date(2020, 1, 1))
        .with_close_delay_seconds(0.0);
    let mut selector =
        TimelineSelector::new(NullRenderer::default(), config).expect("selector");
    let bounds = selector.axis_bounds();
    selector.pointer_move(bounds.x + 10.0, bounds.y + bounds.height / 2.0);
    selector.pointer_leave(5.0);
    assert!(selector.poll(5.0));
}

#[test]
fn grid_rejects_invalid_viewport() {
    let config = GridConfig::new(Viewport::new(400, 0));
    let err = GridCalendar::new(NullRenderer::default(), config)
        .err()
        .expect("must fail");
    assert!(matches!(err, PickerError::InvalidViewport { height: 0, .. }));
}

#[test]
fn grid_rejects_first_day_of_week_out_of_range() {
    let config = GridConfig::new(Viewport::new(400, 360)).with_first_day_of_week(7);
    let err = GridCalendar::new(NullRenderer::default(), config)
        .err()
        .expect("must fail");
    assert!(matches!(err, PickerError::InvalidConfiguration { .. }));
}

#[test]
fn grid_rejects_min_after_max() {
    let config = GridConfig::new(Viewport::new(400, 360))
        .with_min_date(date(2024, 7, 20))
        .with_max_date(date(2024, 7, 10));
    let err = GridCalendar::new(NullRenderer::default(), config)
        .err()
        .expect("must fail");
    assert!(matches!(err, PickerError::InvalidConfiguration { .. }));
}

#[test]
fn configuration_errors_carry_a_reason() {
    let config = GridConfig::new(Viewport::new(400, 360)).with_first_day_of_week(9);
    let err = GridCalendar::new(NullRenderer::default(), config)
        .err()
        .expect("must fail");
    assert!(err.to_string().contains("first_day_of_week"));
}
