//! Direct mode must leave the cursor alone and never click.

use crate::helpers::{assert_cursor_at, assert_no_clicks, TestRouterBuilder};
use touchbrowser::input::{Routing, TouchEvent};

fn gesture_soup() -> Vec<TouchEvent> {
    let mut events = Vec::new();
    for i in 0..20 {
        let f = i as f32;
        events.push(TouchEvent::down(f * 10.0, f * 5.0));
        events.push(TouchEvent::moved(f * 3.0 - 20.0, 17.0 - f * 2.0, f, f));
        events.push(TouchEvent::moved(-1000.0, 1000.0, f, f));
        events.push(TouchEvent::up(f, f));
    }
    events
}

#[test]
fn test_direct_mode_forwards_all_events() {
    let mut h = TestRouterBuilder::new().build();

    for event in gesture_soup() {
        assert_eq!(h.send(event), Routing::Forwarded, "event {:?} was not forwarded", event);
    }

    assert_cursor_at(&h, 300.0, 400.0);
    assert_no_clicks(&h);
    assert!(h.surface.requests().is_empty());
}

#[test]
fn test_direct_mode_after_round_trip() {
    let mut h = TestRouterBuilder::new().in_cursor_mode().build();
    let _ = h.drag(-100.0, 30.0);
    h.router.toggle_mode();

    for event in gesture_soup() {
        assert_eq!(h.send(event), Routing::Forwarded);
    }

    assert_cursor_at(&h, 200.0, 430.0);
    assert_no_clicks(&h);
}

#[test]
fn test_cursor_mode_never_forwards() {
    let mut h = TestRouterBuilder::new().in_cursor_mode().build();

    for event in gesture_soup() {
        assert_eq!(h.send(event), Routing::Consumed);
    }

    // One click per Down
    assert_eq!(h.surface.clicks().len(), 20);
}
