//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestRouterBuilder` - builder for a router plus headless surface
//! - `assert_cursor_at()` / `assert_no_clicks()` - common assertions

use touchbrowser::cursor::InteractionMode;
use touchbrowser::input::{InputRouter, Routing, TouchEvent};
use touchbrowser::surface::{HeadlessSurface, SurfaceSize};

/// A router wired to a headless surface
pub struct Harness {
    pub router: InputRouter,
    pub surface: HeadlessSurface,
}

impl Harness {
    pub fn send(&mut self, event: TouchEvent) -> Routing {
        self.router.handle(event, &mut self.surface)
    }

    /// Relative drag with the finger parked at the surface origin
    pub fn drag(&mut self, dx: f32, dy: f32) -> Routing {
        self.send(TouchEvent::moved(dx, dy, 0.0, 0.0))
    }

    /// Down followed by Up at the same point
    pub fn tap(&mut self, x: f32, y: f32) -> (Routing, Routing) {
        (self.send(TouchEvent::down(x, y)), self.send(TouchEvent::up(x, y)))
    }
}

/// Builder for test harnesses.
///
/// # Example
/// ```ignore
/// let mut h = TestRouterBuilder::new()
///     .with_size(600.0, 800.0)
///     .in_cursor_mode()
///     .build();
/// ```
pub struct TestRouterBuilder {
    size: SurfaceSize,
    cursor_mode: bool,
    ready: bool,
}

impl Default for TestRouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRouterBuilder {
    /// 600x800 surface, Direct mode, ready
    pub fn new() -> Self {
        Self {
            size: SurfaceSize::new(600.0, 800.0),
            cursor_mode: false,
            ready: true,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = SurfaceSize::new(width, height);
        self
    }

    pub fn in_cursor_mode(mut self) -> Self {
        self.cursor_mode = true;
        self
    }

    /// Surface that rejects requests, like a web view still being created
    pub fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    pub fn build(self) -> Harness {
        let mut router = InputRouter::new(self.size);
        if self.cursor_mode {
            router.toggle_mode();
        }
        let surface = if self.ready {
            HeadlessSurface::new(self.size)
        } else {
            HeadlessSurface::not_ready(self.size)
        };
        Harness { router, surface }
    }
}

/// Assert the cursor position exactly
pub fn assert_cursor_at(h: &Harness, x: f32, y: f32) {
    assert_eq!(
        h.router.cursor().position(),
        (x, y),
        "Expected cursor at ({}, {}), got {:?}",
        x,
        y,
        h.router.cursor().position()
    );
}

pub fn assert_no_clicks(h: &Harness) {
    assert!(h.surface.clicks().is_empty(), "Unexpected clicks: {:?}", h.surface.clicks());
}

pub fn assert_mode(h: &Harness, mode: InteractionMode) {
    let state = h.router.cursor();
    assert_eq!(state.mode(), mode);
    assert_eq!(state.visible(), mode == InteractionMode::Cursor);
}
