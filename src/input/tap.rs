//! Touch down/up handling - tap to click at the cursor.
//!
//! The click fires on touch down, not on release. A gesture that starts in
//! Cursor mode therefore only ever clicks where the cursor was at touch down,
//! and press-and-drag selection isn't available in Cursor mode.

use super::coords::CoordinateConverter;
use super::{InputRouter, Routing};
use crate::surface::RenderingSurface;
use tracing::{debug, warn};

impl InputRouter {
    /// Issue one synthetic click at the cursor. Only reached in Cursor mode.
    pub(super) fn handle_tap_down<S>(&mut self, surface: &mut S) -> Routing
    where
        S: RenderingSurface + ?Sized,
    {
        let size = surface.size();
        self.cursor.fit_to(size);

        let target = CoordinateConverter::surface_to_content(self.cursor.current_state().position(), size);
        debug!("Synthetic click at content ({}, {})", target.content_x, target.content_y);

        // Fire-and-forget: a failed click is dropped, the user just sees nothing happen
        if let Err(e) = surface.synthesize_click(target.content_x, target.content_y) {
            warn!("Dropped synthetic click at ({}, {}): {}", target.content_x, target.content_y, e);
        }

        Routing::Consumed
    }

    /// Touch released in Cursor mode
    pub(super) fn handle_tap_up(&mut self) -> Routing {
        Routing::Consumed
    }
}
