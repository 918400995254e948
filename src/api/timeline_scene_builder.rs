use crate::api::timeline_selector::TimelineSelector;
use crate::core::Orientation;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

/// Year counts above this render only the first and last year label to
/// avoid overlap.
pub const MAX_FULLY_LABELED_YEARS: usize = 10;

const LABEL_GAP_PX: f64 = 6.0;
const MONTH_TICK_LENGTH_PX: f64 = 10.0;

/// Materializes the timeline selector into a backend-agnostic frame:
/// axis line, year ticks, year labels per the density rule, and the month
/// panel when hover is active.
pub(crate) fn build<R: Renderer>(selector: &TimelineSelector<R>) -> RenderFrame {
    let mut frame = RenderFrame::new(selector.viewport());
    let style = selector.style();
    let transform = selector.transform();
    let cross = selector.axis_cross_px();
    let horizontal = transform.orientation() == Orientation::Horizontal;

    let axis_start = transform.origin_px();
    let axis_end = transform.origin_px() + transform.length_px();
    frame.lines.push(if horizontal {
        LinePrimitive::new(axis_start, cross, axis_end, cross, style.axis_width, style.axis_color)
    } else {
        LinePrimitive::new(cross, axis_start, cross, axis_end, style.axis_width, style.axis_color)
    });

    let hovered_year = selector.hovered_year();
    let selected_year = selector.selected().map(|date| date.year());
    let half_tick = style.tick_length_px / 2.0;

    let ticks = selector.year_tick_coords();
    for &(year, along) in &ticks {
        let color = if Some(year) == selected_year {
            style.selected_tick_color
        } else if Some(year) == hovered_year {
            style.hovered_tick_color
        } else {
            style.tick_color
        };
        frame.lines.push(if horizontal {
            LinePrimitive::new(along, cross - half_tick, along, cross + half_tick, 1.5, color)
        } else {
            LinePrimitive::new(cross - half_tick, along, cross + half_tick, along, 1.5, color)
        });
    }

    let labeled: Vec<(i32, f64)> = if ticks.len() > MAX_FULLY_LABELED_YEARS {
        match (ticks.first(), ticks.last()) {
            (Some(&first), Some(&last)) => vec![first, last],
            _ => Vec::new(),
        }
    } else {
        ticks.clone()
    };
    for (year, along) in labeled {
        let (x, y, h_align) = if horizontal {
            (along, cross + half_tick + LABEL_GAP_PX, TextHAlign::Center)
        } else {
            (cross + half_tick + LABEL_GAP_PX, along, TextHAlign::Left)
        };
        frame.texts.push(TextPrimitive::new(
            year.to_string(),
            x,
            y,
            style.label_font_px,
            style.label_color,
            h_align,
        ));
    }

    if let Some(panel) = selector.month_panel() {
        build_panel(selector, *panel, &mut frame);
    }

    frame
}

fn build_panel<R: Renderer>(
    selector: &TimelineSelector<R>,
    panel: crate::api::month_panel::MonthPanel,
    frame: &mut RenderFrame,
) {
    let style = selector.style();
    let bounds = panel.bounds();
    let horizontal = selector.transform().orientation() == Orientation::Horizontal;

    frame.rects.push(
        RectPrimitive::filled(bounds.x, bounds.y, bounds.width, bounds.height, style.panel_background)
            .with_border(1.0, style.panel_border_color)
            .with_corner_radius(style.panel_corner_radius),
    );

    let hovered_month = selector.hovered_month();
    let selected = selector.selected();
    let half_tick = MONTH_TICK_LENGTH_PX / 2.0;
    for month_index in 0..12u32 {
        let center = panel.tick_center(month_index);
        let color = if panel.month_disabled(month_index) {
            style.disabled_color
        } else if selected.is_some_and(|date| {
            date.year() == panel.year() && date.month() == month_index + 1
        }) {
            style.selected_tick_color
        } else if hovered_month == Some(month_index) {
            style.hovered_tick_color
        } else {
            style.month_tick_color
        };
        frame.lines.push(if horizontal {
            LinePrimitive::new(center.x, center.y - half_tick, center.x, center.y + half_tick, 1.5, color)
        } else {
            LinePrimitive::new(center.x - half_tick, center.y, center.x + half_tick, center.y, 1.5, color)
        });
    }

    // Header: hovered month name + panel year, above the panel body.
    if let Some(month_index) = hovered_month {
        let name = selector
            .formatter()
            .month_name(selector.locale(), month_index + 1);
        if !name.is_empty() {
            let label = format!("{name} {}", panel.year());
            let x = bounds.x + bounds.width / 2.0;
            let y = bounds.y - style.label_font_px - 4.0;
            frame.texts.push(TextPrimitive::new(
                label,
                x,
                y.max(0.0),
                style.label_font_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
    }
}
