use std::cell::RefCell;
use std::rc::Rc;

use datepick_rs::api::outside_click::{
    active_subscription_count, dispatch_pointer_down, subscribe,
};
use datepick_rs::api::{TimelineConfig, TimelineSelector};
use datepick_rs::core::{CalendarDate, Viewport};
use datepick_rs::render::NullRenderer;

#[test]
fn subscriptions_receive_every_dispatch() {
    let presses: Rc<RefCell<Vec<(f64, f64)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&presses);
    let subscription = subscribe(move |x, y| sink.borrow_mut().push((x, y)));

    dispatch_pointer_down(10.0, 20.0);
    dispatch_pointer_down(-5.0, 0.0);
    assert_eq!(presses.borrow().as_slice(), &[(10.0, 20.0), (-5.0, 0.0)]);

    drop(subscription);
    dispatch_pointer_down(1.0, 1.0);
    assert_eq!(presses.borrow().len(), 2);
}

#[test]
fn dropping_the_guard_deregisters() {
    let before = active_subscription_count();
    let first = subscribe(|_, _| {});
    let second = subscribe(|_, _| {});
    assert_eq!(active_subscription_count(), before + 2);

    drop(first);
    assert_eq!(active_subscription_count(), before + 1);
    drop(second);
    assert_eq!(active_subscription_count(), before);
}

#[test]
fn slots_are_reused_after_drop() {
    let first = subscribe(|_, _| {});
    let baseline = active_subscription_count();
    drop(first);
    let _second = subscribe(|_, _| {});
    assert_eq!(active_subscription_count(), baseline);
}

#[test]
fn handler_may_drop_its_own_subscription_during_dispatch() {
    let slot: Rc<RefCell<Option<_>>> = Rc::new(RefCell::new(None));
    let hits = Rc::new(RefCell::new(0u32));

    let slot_in_handler = Rc::clone(&slot);
    let hits_in_handler = Rc::clone(&hits);
    let subscription = subscribe(move |_, _| {
        *hits_in_handler.borrow_mut() += 1;
        slot_in_handler.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(subscription);

    dispatch_pointer_down(0.0, 0.0);
    assert_eq!(*hits.borrow(), 1);

    // The self-dropped handler must not fire again.
    dispatch_pointer_down(0.0, 0.0);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn subscriptions_wire_force_clear_into_the_timeline() {
    let config = TimelineConfig::new(
        Viewport::new(1000, 200),
        CalendarDate::new(2020, 1, 1).expect("valid date"),
    );
    let selector = Rc::new(RefCell::new(
        TimelineSelector::new(NullRenderer::default(), config).expect("selector"),
    ));

    let bounds = selector.borrow().axis_bounds();
    selector
        .borrow_mut()
        .pointer_move(bounds.x + 10.0, bounds.y + bounds.height / 2.0);
    assert!(selector.borrow().hovered_year().is_some());

    let target = Rc::clone(&selector);
    let _subscription = subscribe(move |x, y| target.borrow_mut().global_pointer_down(x, y));

    // Press far outside the axis band and popup.
    dispatch_pointer_down(2.0, 2.0);
    assert_eq!(selector.borrow().hovered_year(), None);
    assert!(selector.borrow().popup_bounds().is_none());
}
