use crate::api::grid_calendar::GridCalendar;
use crate::error::PickerResult;
use crate::render::{RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

const OUTER_MARGIN_PX: f64 = 8.0;
const TITLE_ROW_PX: f64 = 24.0;
const HEADER_ROW_PX: f64 = 18.0;
const FOOTER_ROW_PX: f64 = 20.0;
const CELL_GAP_PX: f64 = 2.0;

/// Materializes the grid calendar into a frame: title row with navigation
/// affordances, weekday header, day cells with today/selected/focus marks,
/// and the clear affordance.
pub(crate) fn build<R: Renderer>(calendar: &GridCalendar<R>) -> PickerResult<RenderFrame> {
    let mut frame = RenderFrame::new(calendar.viewport());
    let style = calendar.style();
    let grid = calendar.month_grid()?;
    let cells = calendar.cells()?;

    let width = f64::from(calendar.viewport().width);
    let height = f64::from(calendar.viewport().height);
    let (visible_year, visible_month) = calendar.visible();

    // Title row: navigation affordances and the visible month name.
    let title_baseline = OUTER_MARGIN_PX + TITLE_ROW_PX / 2.0;
    let title = format!(
        "{} {}",
        calendar.formatter().month_name(calendar.locale(), visible_month),
        visible_year
    );
    frame.texts.push(TextPrimitive::new(
        title,
        width / 2.0,
        title_baseline,
        style.label_font_px + 2.0,
        style.label_color,
        TextHAlign::Center,
    ));
    for (glyph, x, h_align) in [
        ("\u{00ab}", OUTER_MARGIN_PX, TextHAlign::Left),
        ("\u{2039}", OUTER_MARGIN_PX + 20.0, TextHAlign::Left),
        ("\u{203a}", width - OUTER_MARGIN_PX - 20.0, TextHAlign::Right),
        ("\u{00bb}", width - OUTER_MARGIN_PX, TextHAlign::Right),
    ] {
        frame.texts.push(TextPrimitive::new(
            glyph,
            x,
            title_baseline,
            style.label_font_px + 2.0,
            style.label_color,
            h_align,
        ));
    }

    // Weekday header row.
    let grid_top = OUTER_MARGIN_PX + TITLE_ROW_PX + HEADER_ROW_PX;
    let grid_left = OUTER_MARGIN_PX;
    let grid_width = width - 2.0 * OUTER_MARGIN_PX;
    let column_width = grid_width / 7.0;
    for (column, weekday) in grid.weekday_columns().iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            calendar.formatter().weekday_short(calendar.locale(), *weekday),
            grid_left + (column as f64 + 0.5) * column_width,
            grid_top - HEADER_ROW_PX / 2.0,
            style.label_font_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    // Day cells.
    let rows = grid.week_count() as f64;
    let grid_height = (height - grid_top - OUTER_MARGIN_PX - FOOTER_ROW_PX).max(rows);
    let row_height = grid_height / rows;
    for (index, cell) in cells.iter().enumerate() {
        let Some(day) = cell.day else {
            continue;
        };
        let column = (index % 7) as f64;
        let row = (index / 7) as f64;
        let x = grid_left + column * column_width + CELL_GAP_PX;
        let y = grid_top + row * row_height + CELL_GAP_PX;
        let cell_width = (column_width - 2.0 * CELL_GAP_PX).max(1.0);
        let cell_height = (row_height - 2.0 * CELL_GAP_PX).max(1.0);

        let fill = if !cell.enabled {
            style.disabled_color
        } else if cell.is_selected {
            style.cell_selected_fill
        } else {
            style.cell_fill
        };
        let mut rect = RectPrimitive::filled(x, y, cell_width, cell_height, fill)
            .with_corner_radius(2.0);
        if cell.is_focused {
            rect = rect.with_border(2.0, style.focus_border_color);
        } else if cell.is_today {
            rect = rect.with_border(1.5, style.today_marker_color);
        }
        frame.rects.push(rect);

        frame.texts.push(TextPrimitive::new(
            day.to_string(),
            x + cell_width / 2.0,
            y + cell_height / 2.0,
            style.label_font_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    // Clear affordance.
    if !calendar.is_disabled() {
        frame.texts.push(TextPrimitive::new(
            "Clear",
            width / 2.0,
            height - OUTER_MARGIN_PX - FOOTER_ROW_PX / 2.0,
            style.label_font_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    Ok(frame)
}
