//! Process-wide (per UI thread) pointer-press subscription.
//!
//! The host forwards every global pointer press once through
//! [`dispatch_pointer_down`]; each live subscription receives it and can
//! force-clear its widget's hover state when the press lands outside the
//! widget. Subscribing returns an RAII guard, so deregistration is
//! guaranteed on widget teardown.

use std::cell::RefCell;

type Handler = Box<dyn FnMut(f64, f64)>;

enum Slot {
    Empty,
    Active(Handler),
    /// Handler temporarily taken out while it runs; a `Drop` during the call
    /// turns this into `Empty` so the handler is not restored afterwards.
    InDispatch,
}

impl Slot {
    fn is_active(&self) -> bool {
        matches!(self, Slot::Active(_))
    }
}

thread_local! {
    static REGISTRY: RefCell<Vec<Slot>> = const { RefCell::new(Vec::new()) };
}

/// Guard tying a global pointer-press handler to a widget's lifetime.
pub struct OutsideClickSubscription {
    slot: usize,
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        REGISTRY.with(|registry| {
            if let Some(entry) = registry.borrow_mut().get_mut(self.slot) {
                *entry = Slot::Empty;
            }
        });
    }
}

/// Registers a handler for global pointer presses on the current UI thread.
#[must_use]
pub fn subscribe(handler: impl FnMut(f64, f64) + 'static) -> OutsideClickSubscription {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let handler: Handler = Box::new(handler);
        for (slot, entry) in registry.iter_mut().enumerate() {
            if matches!(entry, Slot::Empty) {
                *entry = Slot::Active(handler);
                return OutsideClickSubscription { slot };
            }
        }
        registry.push(Slot::Active(handler));
        OutsideClickSubscription {
            slot: registry.len() - 1,
        }
    })
}

/// Fans one global pointer press out to every live subscription.
///
/// Handlers are taken out of their slot for the duration of the call, so a
/// handler may itself subscribe or drop subscriptions without re-entering
/// the registry borrow.
pub fn dispatch_pointer_down(x: f64, y: f64) {
    let slots = REGISTRY.with(|registry| registry.borrow().len());
    for slot in 0..slots {
        let taken = REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            match registry.get_mut(slot) {
                Some(entry @ Slot::Active(_)) => {
                    let Slot::Active(handler) = std::mem::replace(entry, Slot::InDispatch) else {
                        return None;
                    };
                    Some(handler)
                }
                _ => None,
            }
        });
        let Some(mut handler) = taken else {
            continue;
        };
        handler(x, y);
        REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            if let Some(entry) = registry.get_mut(slot) {
                if matches!(entry, Slot::InDispatch) {
                    *entry = Slot::Active(handler);
                }
            }
        });
    }
}

/// Number of live subscriptions on the current thread.
#[must_use]
pub fn active_subscription_count() -> usize {
    REGISTRY.with(|registry| {
        registry
            .borrow()
            .iter()
            .filter(|entry| entry.is_active())
            .count()
    })
}
