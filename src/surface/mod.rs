//! Rendering surface abstraction.
//!
//! The input core only needs four things from the embedded web view: its
//! current size, a way to navigate, and a way to dispatch a click at a
//! content-space coordinate. [`RenderingSurface`] names that capability set.
//!
//! ## Variants
//!
//! - `HeadlessSurface` - records requests, used for tests and non-mobile dev
//! - `WebViewSurface` - backed by a wry web view (feature `shell`)
//!
//! The variant is picked when the shell is constructed, never by catching a
//! failed platform lookup at runtime.

mod bridge;
mod headless;
mod script;
#[cfg(feature = "shell")]
mod webview;

pub use bridge::{PAGE_BRIDGE_SCRIPT, PageMessage, PageOverlay, cursor_icon_origin};
pub use headless::{HeadlessSurface, SurfaceRequest};
pub use script::click_script;
#[cfg(feature = "shell")]
pub use webview::WebViewSurface;

use crate::error::SurfaceError;

/// Current pixel dimensions of a rendering surface.
///
/// Always finite and non-negative, so clamping into it never panics or
/// produces NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    width: f32,
    height: f32,
}

impl SurfaceSize {
    /// Negative or non-finite dimensions become zero
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center point of the surface
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a point into `[0, width] x [0, height]`.
    #[inline]
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }

    /// Returns true if the point lies inside the surface bounds (edges included)
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        let (width, height) = crate::constants::DEFAULT_SURFACE_SIZE;
        Self::new(width, height)
    }
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// The embedded web rendering widget, as seen by the input core.
///
/// `size` must report the dimensions at the time of the call. Callers re-read
/// it for every event and never keep it across events, since the surface can
/// be rotated or resized at any time.
pub trait RenderingSurface {
    /// Current surface dimensions
    fn size(&self) -> SurfaceSize;

    /// Returns false until the underlying widget can take requests
    fn is_ready(&self) -> bool {
        true
    }

    /// Navigate to `address`
    fn load_address(&mut self, address: &str) -> Result<(), SurfaceError>;

    /// Request a click on the document at a content-space coordinate.
    ///
    /// Fire-and-forget: returning `Ok` means the request was submitted, not
    /// that anything was clicked.
    fn synthesize_click(&mut self, content_x: f32, content_y: f32) -> Result<(), SurfaceError>;
}
