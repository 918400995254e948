use serde::{Deserialize, Serialize};

use crate::core::CalendarDate;

/// The single event type emitted by both widget variants.
///
/// `None` is carried only by the grid calendar's explicit clear action; the
/// timeline selector never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    DateSelected(Option<CalendarDate>),
}

/// Extension hook interface for bounded host logic.
///
/// Observers see every emitted selection without being able to mutate widget
/// internals directly.
pub trait SelectionObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SelectionEvent);
}

pub type SelectionCallback = Box<dyn FnMut(SelectionEvent)>;

/// Fan-out of selection events to the host callback and registered observers.
pub(crate) struct SelectionEmitter {
    callback: Option<SelectionCallback>,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl SelectionEmitter {
    pub(crate) fn new() -> Self {
        Self {
            callback: None,
            observers: Vec::new(),
        }
    }

    pub(crate) fn set_callback(&mut self, callback: SelectionCallback) {
        self.callback = Some(callback);
    }

    pub(crate) fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    /// Emits unconditionally; repeated selections are not deduplicated.
    pub(crate) fn emit(&mut self, event: SelectionEvent) {
        if let Some(callback) = self.callback.as_mut() {
            callback(event);
        }
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}
