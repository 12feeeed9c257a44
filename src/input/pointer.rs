//! Desktop pointer adaptation.
//!
//! Windowing toolkits report mouse positions with a top-left origin and no
//! deltas. `PointerAdapter` turns left-button presses, drags and releases over
//! the surface into [`TouchEvent`]s in surface space. Pointer input captured
//! inside the page arrives as [`PageMessage`]s and goes through the same path.

use super::{CoordinateConverter, TouchEvent};
use crate::surface::{PageMessage, SurfaceSize};

#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    /// Last window position of the active gesture
    last: Option<(f32, f32)>,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left button pressed at a window position. `origin_y` is the window Y of
    /// the surface's top edge. Presses outside the surface start no gesture.
    pub fn press(&mut self, window_pos: (f32, f32), origin_y: f32, size: SurfaceSize) -> Option<TouchEvent> {
        let (x, y) = CoordinateConverter::window_to_surface(window_pos, origin_y, size);
        if !size.contains(x, y) {
            self.last = None;
            return None;
        }
        self.last = Some(window_pos);
        Some(TouchEvent::down(x, y))
    }

    /// Pointer moved with the left button held
    pub fn drag(&mut self, window_pos: (f32, f32), origin_y: f32, size: SurfaceSize) -> Option<TouchEvent> {
        let last = self.last?;
        self.last = Some(window_pos);
        let (delta_x, delta_y) =
            CoordinateConverter::delta_window_to_surface((window_pos.0 - last.0, window_pos.1 - last.1));
        let (x, y) = CoordinateConverter::window_to_surface(window_pos, origin_y, size);
        Some(TouchEvent::moved(delta_x, delta_y, x, y))
    }

    /// Left button released; ends the gesture
    pub fn release(&mut self, window_pos: (f32, f32), origin_y: f32, size: SurfaceSize) -> Option<TouchEvent> {
        self.last.take()?;
        let (x, y) = CoordinateConverter::window_to_surface(window_pos, origin_y, size);
        Some(TouchEvent::up(x, y))
    }

    /// Pointer input posted by the page. Page coordinates are relative to the
    /// surface's top edge.
    pub fn page_event(&mut self, message: PageMessage, size: SurfaceSize) -> Option<TouchEvent> {
        match message {
            PageMessage::Down { x, y } => self.press((x, y), 0.0, size),
            PageMessage::Move { x, y } => self.drag((x, y), 0.0, size),
            PageMessage::Up { x, y } => self.release((x, y), 0.0, size),
            PageMessage::Ready | PageMessage::Keyboard => None,
        }
    }
}
