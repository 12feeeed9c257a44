//! Surface size is re-read on every event.

use crate::helpers::{assert_cursor_at, TestRouterBuilder};
use touchbrowser::input::TouchEvent;
use touchbrowser::surface::SurfaceSize;

#[test]
fn test_rotation_between_placement_and_click() {
    let mut h = TestRouterBuilder::new().with_size(600.0, 800.0).in_cursor_mode().build();
    let _ = h.drag(-200.0, -350.0);
    assert_cursor_at(&h, 100.0, 50.0);

    h.surface.resize(SurfaceSize::new(800.0, 600.0));
    let _ = h.send(TouchEvent::down(0.0, 0.0));

    assert_eq!(h.surface.clicks(), vec![(100.0, 550.0)]);
}

#[test]
fn test_drag_clamps_to_new_bounds() {
    let mut h = TestRouterBuilder::new().with_size(600.0, 800.0).in_cursor_mode().build();

    h.surface.resize(SurfaceSize::new(1000.0, 300.0));
    let _ = h.drag(1000.0, 1000.0);

    assert_cursor_at(&h, 1000.0, 300.0);
}

#[test]
fn test_surface_resized_refits_cursor() {
    let mut h = TestRouterBuilder::new().with_size(600.0, 800.0).build();

    h.router.surface_resized(SurfaceSize::new(200.0, 200.0));

    assert_cursor_at(&h, 200.0, 200.0);
}

#[test]
fn test_non_finite_drag_keeps_clicks_finite() {
    let mut h = TestRouterBuilder::new().with_size(600.0, 800.0).in_cursor_mode().build();

    let _ = h.drag(f32::NAN, 25.0);
    let _ = h.drag(f32::INFINITY, f32::NEG_INFINITY);
    assert_cursor_at(&h, 300.0, 400.0);

    let _ = h.drag(10.0, 0.0);
    let _ = h.tap(0.0, 0.0);
    assert_eq!(h.surface.clicks(), vec![(310.0, 400.0)]);
}

#[test]
fn test_degenerate_surface_size_collapses_to_origin() {
    let mut h = TestRouterBuilder::new().with_size(f32::NAN, -1.0).in_cursor_mode().build();
    assert_cursor_at(&h, 0.0, 0.0);

    let _ = h.drag(50.0, 50.0);
    assert_cursor_at(&h, 0.0, 0.0);

    // A NaN width after a real resize collapses only x
    h.surface.resize(SurfaceSize::new(600.0, 800.0));
    let _ = h.drag(120.0, 80.0);
    h.surface.resize(SurfaceSize::new(f32::NAN, 800.0));
    let _ = h.tap(0.0, 0.0);

    let clicks = h.surface.clicks();
    assert_eq!(clicks, vec![(0.0, 720.0)]);
    assert!(clicks.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
}
