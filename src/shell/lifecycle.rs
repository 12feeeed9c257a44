//! Shell lifecycle - initialization, web view creation and settings reload.

use super::{BrowserShell, ContentArea};
use crate::input::{InputRouter, PointerAdapter};
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use crate::surface::{PAGE_BRIDGE_SCRIPT, RenderingSurface, WebViewSurface};
use crate::toolbar::ToolbarState;
use gpui::*;
use gpui_component::input::InputState;
use gpui_component::webview::WebView;
use std::sync::mpsc;
use tracing::{error, info, warn};
use wry::WebViewBuilder;

impl BrowserShell {
    pub fn new(settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let toolbar = ToolbarState::new(settings.home_address.clone());
        let home = toolbar.address().to_string();
        let address_input = cx.new(|cx| InputState::new(window, cx).default_value(home));

        cx.subscribe_in(
            &address_input,
            window,
            |this, _input, event: &gpui_component::input::InputEvent, window, cx| {
                if let gpui_component::input::InputEvent::PressEnter { .. } = event {
                    this.go(window, cx);
                }
            },
        )
        .detach();

        let area = ContentArea::from_window(window, settings.toolbar_height_fraction);

        // The web view needs a laid-out native window, so create it after the first frame
        cx.defer_in(window, |this, window, cx| this.create_webview(window, cx));

        cx.spawn_in(window, async move |this, cx| {
            loop {
                cx.background_executor().timer(super::PAGE_POLL_INTERVAL).await;
                if this
                    .update_in(cx, |this, window, cx| this.drain_page_messages(window, cx))
                    .is_err()
                {
                    break;
                }
            }
        })
        .detach();

        Self {
            router: InputRouter::new(area.size),
            pointer: PointerAdapter::new(),
            settings_watcher: default_settings_path().and_then(|p| SettingsWatcher::new(p).ok()),
            settings,
            toolbar,
            address_input,
            webview: None,
            page_messages: None,
            last_size: Some(area.size),
        }
    }

    fn create_webview(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let (tx, rx) = mpsc::channel();
        let builder = WebViewBuilder::new()
            .with_initialization_script(PAGE_BRIDGE_SCRIPT)
            .with_ipc_handler(move |request| {
                let _ = tx.send(request.body().clone());
            });
        let builder = if self.settings.javascript_enabled {
            builder
        } else {
            warn!("JavaScript disabled; cursor mode and cursor clicks will not reach the page");
            builder.with_javascript_disabled()
        };

        let webview = match build_child_webview(builder, window) {
            Ok(webview) => webview,
            Err(e) => {
                error!("Failed to create WebView: {}", e);
                return;
            }
        };

        self.webview = Some(cx.new(|cx| WebView::new(webview, window, cx)));
        self.page_messages = Some(rx);
        info!("WebView ready");
        self.go(window, cx);
    }

    /// Reload settings when the settings file changes on disk
    pub(crate) fn check_settings_reload(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(ref mut watcher) = self.settings_watcher else {
            return;
        };
        if let Some(event) = watcher.poll() {
            match event {
                SettingsEvent::Modified | SettingsEvent::Created => {
                    info!("Settings file changed, reloading...");
                    let settings = Settings::load();
                    let pending = settings.restart_required(&self.settings);
                    if !pending.is_empty() {
                        warn!("Changed settings apply after restart: {}", pending.join(", "));
                    }
                    self.settings = settings;
                    self.sync_page_overlay(window, cx);
                    cx.notify();
                }
                SettingsEvent::Deleted => {
                    warn!("Settings file deleted");
                }
                SettingsEvent::Error(e) => {
                    error!("Settings watch error: {}", e);
                }
            }
        }
    }

    /// Current content area, re-read from the window
    pub(crate) fn content_area(&self, window: &Window) -> ContentArea {
        ContentArea::from_window(window, self.settings.toolbar_height_fraction)
    }

    /// Run `f` against the live surface, or a not-ready stand-in before the
    /// web view exists.
    pub(crate) fn with_surface<R>(
        &mut self,
        window: &Window,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut Self, &mut dyn RenderingSurface) -> R,
    ) -> R {
        let area = self.content_area(window);
        match self.webview.clone() {
            Some(entity) => {
                let webview = entity.read(cx);
                let mut surface = WebViewSurface::new(webview.raw(), area.size);
                f(self, &mut surface)
            }
            None => {
                let mut surface = crate::surface::HeadlessSurface::not_ready(area.size);
                f(self, &mut surface)
            }
        }
    }
}

#[cfg(any(
    target_os = "macos",
    target_os = "windows",
    target_os = "ios",
    target_os = "android"
))]
fn build_child_webview(builder: WebViewBuilder<'_>, window: &Window) -> Result<wry::WebView, String> {
    builder
        .build_as_child(window)
        .map_err(|e| format!("{:?}", e))
}

#[cfg(not(any(
    target_os = "macos",
    target_os = "windows",
    target_os = "ios",
    target_os = "android"
)))]
fn build_child_webview(_builder: WebViewBuilder<'_>, _window: &Window) -> Result<wry::WebView, String> {
    Err("WebView not supported on this platform".to_string())
}
