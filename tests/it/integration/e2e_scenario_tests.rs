//! End-to-end scenario: toggle, drag, tap, toggle back.

use crate::helpers::{assert_cursor_at, assert_mode, TestRouterBuilder};
use touchbrowser::cursor::InteractionMode;
use touchbrowser::input::{Routing, TouchEvent};

#[test]
fn test_full_cursor_session() {
    let mut h = TestRouterBuilder::new().with_size(600.0, 800.0).build();

    // Initial state
    assert_mode(&h, InteractionMode::Direct);
    assert_cursor_at(&h, 300.0, 400.0);

    // Mode button
    assert_eq!(h.router.toggle_mode(), InteractionMode::Cursor);
    assert_mode(&h, InteractionMode::Cursor);

    // Drag
    assert_eq!(h.drag(50.0, -20.0), Routing::Consumed);
    assert_cursor_at(&h, 350.0, 380.0);

    // Tap at the cursor
    assert_eq!(h.send(TouchEvent::down(350.0, 380.0)), Routing::Consumed);
    assert_eq!(h.surface.clicks(), vec![(350.0, 420.0)]);
    assert_eq!(h.send(TouchEvent::up(350.0, 380.0)), Routing::Consumed);
    assert_eq!(h.surface.clicks().len(), 1);

    // Back to Direct
    assert_eq!(h.router.toggle_mode(), InteractionMode::Direct);
    assert_mode(&h, InteractionMode::Direct);
    assert_eq!(h.drag(25.0, 25.0), Routing::Forwarded);
    assert_cursor_at(&h, 350.0, 380.0);
    assert_eq!(h.surface.clicks().len(), 1);
}

#[test]
fn test_each_tap_clicks_once() {
    let mut h = TestRouterBuilder::new().in_cursor_mode().build();

    for _ in 0..3 {
        let (down, up) = h.tap(10.0, 10.0);
        assert!(down.is_consumed());
        assert!(up.is_consumed());
    }

    assert_eq!(h.surface.clicks(), vec![(300.0, 400.0); 3]);
}

#[test]
fn test_drag_after_down_does_not_move_click() {
    let mut h = TestRouterBuilder::new().in_cursor_mode().build();

    let _ = h.send(TouchEvent::down(0.0, 0.0));
    let _ = h.drag(100.0, 100.0);
    let _ = h.send(TouchEvent::up(100.0, 100.0));

    // Only the touch-down position was clicked; the drag moved the cursor
    assert_eq!(h.surface.clicks(), vec![(300.0, 400.0)]);
    assert_cursor_at(&h, 400.0, 500.0);
}

#[test]
fn test_clicks_dropped_until_surface_ready() {
    let mut h = TestRouterBuilder::new().in_cursor_mode().not_ready().build();

    let (down, _) = h.tap(0.0, 0.0);
    assert!(down.is_consumed());
    assert!(h.surface.requests().is_empty());

    h.surface.set_ready(true);
    let _ = h.tap(0.0, 0.0);
    assert_eq!(h.surface.clicks(), vec![(300.0, 400.0)]);
}
