//! Input router - decides who gets each touch event.
//!
//! ```text
//! Direct:  Down/Move/Up -> Forwarded   (page scrolls, zooms, selects)
//! Cursor:  Move         -> Consumed    (cursor drag)
//!          Down         -> Consumed    (synthetic click at the cursor)
//!          Up           -> Consumed    (nothing, click already fired)
//! ```

use super::{Routing, TouchEvent, TouchKind};
use crate::cursor::{CursorController, CursorState, InteractionMode};
use crate::surface::{RenderingSurface, SurfaceSize};
use tracing::debug;

/// Routes touch events between the virtual cursor and the page.
///
/// Owns the [`CursorController`]; every cursor mutation goes through it.
#[derive(Debug, Clone)]
pub struct InputRouter {
    pub(super) cursor: CursorController,
}

impl InputRouter {
    /// Router for a freshly created surface of the given size
    pub fn new(size: SurfaceSize) -> Self {
        Self::with_controller(CursorController::new(size))
    }

    pub fn with_controller(cursor: CursorController) -> Self {
        Self { cursor }
    }

    /// Classify and handle one touch event.
    ///
    /// The surface size is read from `surface` on every call.
    pub fn handle<S>(&mut self, event: TouchEvent, surface: &mut S) -> Routing
    where
        S: RenderingSurface + ?Sized,
    {
        if self.cursor.mode() == InteractionMode::Direct {
            debug!("Forwarding {:?}", event.kind());
            return Routing::Forwarded;
        }

        debug!("Cursor mode {:?} at {:?}", event.kind(), event.position());
        match event.kind() {
            TouchKind::Move => {
                let (delta_x, delta_y) = event.delta();
                self.handle_drag(delta_x, delta_y, &*surface)
            }
            TouchKind::Down => self.handle_tap_down(surface),
            TouchKind::Up => self.handle_tap_up(),
        }
    }

    /// Mode button pressed
    pub fn toggle_mode(&mut self) -> InteractionMode {
        self.cursor.toggle_mode()
    }

    pub fn mode(&self) -> InteractionMode {
        self.cursor.mode()
    }

    /// Snapshot for drawing the cursor icon
    pub fn cursor(&self) -> CursorState {
        self.cursor.current_state()
    }

    /// The surface was resized or rotated
    pub fn surface_resized(&mut self, size: SurfaceSize) {
        self.cursor.fit_to(size);
    }
}
