//! Touch move handling - relative cursor drag.

use super::{InputRouter, Routing};
use crate::surface::RenderingSurface;

impl InputRouter {
    /// Apply a drag delta to the cursor. Only reached in Cursor mode.
    pub(super) fn handle_drag<S>(&mut self, delta_x: f32, delta_y: f32, surface: &S) -> Routing
    where
        S: RenderingSurface + ?Sized,
    {
        self.cursor.apply_drag(delta_x, delta_y, surface.size());
        Routing::Consumed
    }
}
