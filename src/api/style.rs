use crate::render::Color;

/// Color and metric table consumed by the scene builders.
///
/// Opaque to interaction logic; hosts may replace any of it wholesale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerStyle {
    pub axis_color: Color,
    pub axis_width: f64,
    pub tick_color: Color,
    pub tick_length_px: f64,
    pub hovered_tick_color: Color,
    pub selected_tick_color: Color,
    pub label_color: Color,
    pub label_font_px: f64,
    pub panel_background: Color,
    pub panel_border_color: Color,
    pub panel_corner_radius: f64,
    pub month_tick_color: Color,
    pub disabled_color: Color,
    pub cell_fill: Color,
    pub cell_selected_fill: Color,
    pub focus_border_color: Color,
    pub today_marker_color: Color,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::rgb(0.25, 0.25, 0.28),
            axis_width: 2.0,
            tick_color: Color::rgb(0.45, 0.45, 0.50),
            tick_length_px: 8.0,
            hovered_tick_color: Color::rgb(0.10, 0.45, 0.85),
            selected_tick_color: Color::rgb(0.85, 0.35, 0.10),
            label_color: Color::rgb(0.20, 0.20, 0.22),
            label_font_px: 11.0,
            panel_background: Color::rgba(0.98, 0.98, 0.99, 0.95),
            panel_border_color: Color::rgb(0.70, 0.70, 0.74),
            panel_corner_radius: 4.0,
            month_tick_color: Color::rgb(0.35, 0.35, 0.40),
            disabled_color: Color::rgba(0.60, 0.60, 0.62, 0.45),
            cell_fill: Color::rgba(0.92, 0.92, 0.94, 1.0),
            cell_selected_fill: Color::rgb(0.10, 0.45, 0.85),
            focus_border_color: Color::rgb(0.10, 0.45, 0.85),
            today_marker_color: Color::rgb(0.85, 0.35, 0.10),
        }
    }
}
