//! Coordinate conversion between the input surface and page content.
//!
//! The cursor lives in surface space (bottom-left origin, Y up). The document
//! uses a top-left origin with Y down. Getting the vertical flip wrong puts
//! every click on the wrong row of the page.

use crate::surface::SurfaceSize;

/// A click position in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentClickTarget {
    pub content_x: f32,
    pub content_y: f32,
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a surface position to content space.
    ///
    /// `size` must be the surface size at the moment of conversion.
    #[inline]
    pub fn surface_to_content(surface_pos: (f32, f32), size: SurfaceSize) -> ContentClickTarget {
        ContentClickTarget {
            content_x: surface_pos.0,
            content_y: size.height() - surface_pos.1,
        }
    }

    /// Convert a content position back to surface space
    #[inline]
    pub fn content_to_surface(target: ContentClickTarget, size: SurfaceSize) -> (f32, f32) {
        (target.content_x, size.height() - target.content_y)
    }

    /// Convert a top-left-origin window position (as reported by the windowing
    /// toolkit) to surface space. `origin_y` is the window Y of the surface's
    /// top edge.
    #[inline]
    pub fn window_to_surface(window_pos: (f32, f32), origin_y: f32, size: SurfaceSize) -> (f32, f32) {
        (window_pos.0, size.height() - (window_pos.1 - origin_y))
    }

    /// Convert a top-left-origin window delta to a surface delta
    #[inline]
    pub fn delta_window_to_surface(delta: (f32, f32)) -> (f32, f32) {
        (delta.0, -delta.1)
    }
}
