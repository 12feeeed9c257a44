//! Desktop shell - the gpui window hosting the toolbar, the web view and the
//! cursor overlay.
//!
//! - `lifecycle` - construction, web view creation, settings reload
//! - `events` - toolbar actions, pointer routing and the page bridge
//! - `render` - view tree
//!
//! The native web view is stacked above everything gpui draws, so once it
//! exists the cursor icon and keyboard button live inside the page (see
//! [`crate::surface::PAGE_BRIDGE_SCRIPT`]) and Cursor-mode pointer input
//! comes back over IPC. The gpui overlay is only drawn before that.

mod events;
mod lifecycle;
mod render;

use crate::input::{InputRouter, PointerAdapter};
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::surface::SurfaceSize;
use crate::toolbar::ToolbarState;
use gpui::*;
use gpui_component::input::InputState;
use gpui_component::webview::WebView;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// How often IPC messages from the page are drained
pub(crate) const PAGE_POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Geometry of the area below the toolbar, in window coordinates
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentArea {
    /// Window Y of the content area's top edge
    pub origin_y: f32,
    pub size: SurfaceSize,
}

impl ContentArea {
    pub(crate) fn from_window(window: &Window, toolbar_fraction: f32) -> Self {
        let viewport = window.viewport_size();
        let width = f32::from(viewport.width);
        let height = f32::from(viewport.height);
        let toolbar_height = height * toolbar_fraction;
        Self {
            origin_y: toolbar_height,
            size: SurfaceSize::new(width, height - toolbar_height),
        }
    }
}

pub struct BrowserShell {
    pub(crate) settings: Settings,
    pub(crate) settings_watcher: Option<SettingsWatcher>,
    pub(crate) toolbar: ToolbarState,
    pub(crate) address_input: Entity<InputState>,
    pub(crate) router: InputRouter,
    pub(crate) pointer: PointerAdapter,
    pub(crate) webview: Option<Entity<WebView>>,
    /// Raw IPC bodies posted by the page bridge
    pub(crate) page_messages: Option<Receiver<String>>,
    pub(crate) last_size: Option<SurfaceSize>,
}
