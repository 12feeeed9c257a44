//! Toolbar state - address bar, GO, mode button and keyboard toggle.
//!
//! Rendering lives in the shell; this is the part with behavior worth testing.

use crate::address::normalize_address;
use crate::cursor::InteractionMode;
use crate::error::SurfaceError;
use crate::surface::RenderingSurface;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ToolbarState {
    address: String,
    keyboard_visible: bool,
}

impl ToolbarState {
    /// Toolbar with the address bar prefilled
    pub fn new(home_address: impl Into<String>) -> Self {
        Self {
            address: home_address.into(),
            keyboard_visible: false,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// GO pressed: load the address bar text.
    ///
    /// On success the address bar shows the normalized address. Nothing is
    /// sent while the surface isn't ready.
    pub fn go<S>(&mut self, surface: &mut S) -> Result<String, SurfaceError>
    where
        S: RenderingSurface + ?Sized,
    {
        if !surface.is_ready() {
            warn!("GO pressed before the web view was ready");
            return Err(SurfaceError::NotReady);
        }

        let address = normalize_address(&self.address)?;
        surface.load_address(&address)?;
        info!("Navigating to {}", address);
        self.address = address.clone();
        Ok(address)
    }

    /// Label for the mode button
    pub fn mode_label(mode: InteractionMode) -> &'static str {
        mode.label()
    }

    /// KB pressed: show or hide the soft keyboard for the address bar
    pub fn toggle_keyboard(&mut self) -> bool {
        self.keyboard_visible = !self.keyboard_visible;
        self.keyboard_visible
    }

    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_HOME_ADDRESS)
    }
}
