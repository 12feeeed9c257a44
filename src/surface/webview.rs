//! Rendering surface backed by a wry web view.
//!
//! Borrowed per event: the shell builds one from the live web view and the
//! current content-area size, so the size is never stale.

use super::{RenderingSurface, SurfaceSize, click_script};
use crate::error::SurfaceError;

pub struct WebViewSurface<'a> {
    webview: &'a wry::WebView,
    size: SurfaceSize,
}

impl<'a> WebViewSurface<'a> {
    pub fn new(webview: &'a wry::WebView, size: SurfaceSize) -> Self {
        Self { webview, size }
    }
}

impl RenderingSurface for WebViewSurface<'_> {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn load_address(&mut self, address: &str) -> Result<(), SurfaceError> {
        self.webview
            .load_url(address)
            .map_err(|e| SurfaceError::Load {
                address: address.to_string(),
                reason: e.to_string(),
            })
    }

    fn synthesize_click(&mut self, content_x: f32, content_y: f32) -> Result<(), SurfaceError> {
        let js = click_script(content_x, content_y)?;
        self.webview
            .evaluate_script(&js)
            .map_err(|e| SurfaceError::Script(e.to_string()))
    }
}
