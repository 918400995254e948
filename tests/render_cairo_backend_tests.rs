#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use datepick_rs::PickerError;
use datepick_rs::api::{GridCalendar, GridConfig, TimelineConfig, TimelineSelector};
use datepick_rs::core::{CalendarDate, Viewport};
use datepick_rs::render::{CairoContextRenderer, CairoRenderer, NullRenderer};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid date")
}

fn timeline_for_years(renderer: CairoRenderer) -> TimelineSelector<CairoRenderer> {
    let config = TimelineConfig::new(Viewport::new(1000, 200), date(2020, 1, 1))
        .with_end_date(date(2024, 12, 31));
    TimelineSelector::new(renderer, config).expect("selector init")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 200).expect_err("invalid width must fail");
    assert!(matches!(err, PickerError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_an_idle_timeline_scene() {
    let renderer = CairoRenderer::new(1000, 200).expect("renderer");
    let mut selector = timeline_for_years(renderer);

    selector.render().expect("render");
    let stats = selector.into_renderer().last_stats();

    // Axis line and one tick per year; labels only, no panel.
    assert_eq!(stats.lines_drawn, 1 + 5);
    assert_eq!(stats.rects_drawn, 0);
    assert_eq!(stats.texts_drawn, 5);
}

#[test]
fn cairo_renderer_fills_the_hover_panel_through_the_rounded_path() {
    let renderer = CairoRenderer::new(1000, 200).expect("renderer");
    let mut selector = timeline_for_years(renderer);
    let bounds = selector.axis_bounds();
    selector.pointer_move(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);
    assert!(selector.popup_bounds().is_some());

    selector.render().expect("render");
    let stats = selector.into_renderer().last_stats();

    // Axis line, five year ticks, twelve month ticks.
    assert_eq!(stats.lines_drawn, 1 + 5 + 12);
    // The panel body is the only rectangle and carries a corner radius.
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.rounded_rects_drawn, 1);
    // Year labels plus the hovered-month header.
    assert_eq!(stats.texts_drawn, 5 + 1);
}

#[test]
fn cairo_renderer_can_draw_a_grid_scene_on_an_external_context() {
    let config = GridConfig::new(Viewport::new(400, 360))
        .with_first_day_of_week(1)
        .with_selected(Some(date(2024, 7, 15)));
    let mut renderer = CairoRenderer::new(400, 360).expect("renderer");
    let calendar = GridCalendar::new(NullRenderer::default(), config).expect("calendar");
    let frame = calendar.build_scene().expect("scene");

    let surface = ImageSurface::create(Format::ARgb32, 400, 360).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    let stats = renderer.last_stats();
    // One rounded cell per day of July.
    assert_eq!(stats.rects_drawn, 31);
    assert_eq!(stats.rounded_rects_drawn, 31);
    // Title, four navigation glyphs, seven headers, 31 day numbers, clear.
    assert_eq!(stats.texts_drawn, 1 + 4 + 7 + 31 + 1);
}
