use gtk4 as gtk;

use crate::api::{GridCalendar, TimelineSelector};
use crate::render::Renderer;

pub struct GtkTimelineAdapter<R: Renderer> {
    _selector: TimelineSelector<R>,
}

impl<R: Renderer> GtkTimelineAdapter<R> {
    #[must_use]
    pub fn new(selector: TimelineSelector<R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self {
            _selector: selector,
        }
    }
}

pub struct GtkGridAdapter<R: Renderer> {
    _calendar: GridCalendar<R>,
}

impl<R: Renderer> GtkGridAdapter<R> {
    #[must_use]
    pub fn new(calendar: GridCalendar<R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self {
            _calendar: calendar,
        }
    }
}
