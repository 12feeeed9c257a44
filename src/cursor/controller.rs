//! Cursor controller - the single writer of [`CursorState`].

use super::{CursorState, InteractionMode};
use crate::surface::SurfaceSize;
use tracing::{debug, info};

/// Owns the cursor state and applies every change to it.
///
/// None of the operations can fail. Out-of-range drags are absorbed by
/// clamping to the surface bounds passed in by the caller.
#[derive(Debug, Clone)]
pub struct CursorController {
    state: CursorState,
}

impl CursorController {
    /// Create a controller for a freshly initialized surface: Direct mode,
    /// hidden cursor at the surface center.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            state: CursorState::centered(size),
        }
    }

    /// Flip between Direct and Cursor mode, returning the new mode
    pub fn toggle_mode(&mut self) -> InteractionMode {
        let mode = self.state.mode().toggled();
        self.state.set_mode(mode);
        info!("Interaction mode: {:?}", mode);
        mode
    }

    /// Current mode
    pub fn mode(&self) -> InteractionMode {
        self.state.mode()
    }

    /// Move the cursor by a relative drag, clamped to `bounds`.
    ///
    /// Drags are 1:1 and accumulate across a gesture. Calling this in Direct
    /// mode does nothing.
    pub fn apply_drag(&mut self, delta_x: f32, delta_y: f32, bounds: SurfaceSize) {
        if !self.state.mode().is_cursor() {
            return;
        }
        if !delta_x.is_finite() || !delta_y.is_finite() {
            debug!("Ignoring non-finite drag ({}, {})", delta_x, delta_y);
            return;
        }

        let (x, y) = self.state.position();
        let clamped = bounds.clamp(x + delta_x, y + delta_y);
        self.state.set_position(clamped);
        debug!("Cursor dragged by ({}, {}) to {:?}", delta_x, delta_y, clamped);
    }

    /// Pull the cursor back inside `bounds` after the surface shrank
    pub fn fit_to(&mut self, bounds: SurfaceSize) {
        let (x, y) = self.state.position();
        let clamped = bounds.clamp(x, y);
        if clamped != (x, y) {
            debug!("Cursor refit from ({}, {}) to {:?}", x, y, clamped);
            self.state.set_position(clamped);
        }
    }

    /// Read-only snapshot
    pub fn current_state(&self) -> CursorState {
        self.state
    }
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new(SurfaceSize::default())
    }
}
