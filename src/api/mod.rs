mod events;
mod grid_calendar;
mod grid_config;
mod grid_scene_builder;
mod month_panel;
pub mod outside_click;
mod style;
mod timeline_config;
mod timeline_scene_builder;
mod timeline_selector;

pub use events::{SelectionCallback, SelectionEvent, SelectionObserver};
pub use grid_calendar::{GridCalendar, GridCell, GridKey};
pub use grid_config::GridConfig;
pub use month_panel::{MONTH_TICK_SPACING_PX, MonthPanel, PANEL_THICKNESS_PX};
pub use outside_click::{
    OutsideClickSubscription, active_subscription_count, dispatch_pointer_down, subscribe,
};
pub use style::PickerStyle;
pub use timeline_config::{DEFAULT_CLOSE_DELAY_SECONDS, TimelineConfig};
pub use timeline_scene_builder::MAX_FULLY_LABELED_YEARS;
pub use timeline_selector::TimelineSelector;
