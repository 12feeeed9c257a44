//! Toolbar actions, pointer routing and the page bridge for the shell.

use super::BrowserShell;
use crate::input::{Routing, TouchEvent};
use crate::surface::{PageMessage, PageOverlay};
use gpui::*;
use tracing::{debug, warn};

fn window_pos(position: Point<Pixels>) -> (f32, f32) {
    (f32::from(position.x), f32::from(position.y))
}

impl BrowserShell {
    /// GO pressed (or Enter in the address bar)
    pub(crate) fn go(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.address_input.read(cx).value().to_string();
        self.toolbar.set_address(text);

        let result = self.with_surface(window, cx, |this, surface| this.toolbar.go(surface));
        match result {
            Ok(address) => {
                self.address_input
                    .update(cx, |input, cx| input.set_value(address, window, cx));
            }
            Err(e) => warn!("Navigation skipped: {}", e),
        }
        cx.notify();
    }

    /// Mode button pressed
    pub(crate) fn toggle_mode(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.router.toggle_mode();
        self.sync_page_overlay(window, cx);
        cx.notify();
    }

    /// KB pressed: focusing the address bar brings up the soft keyboard
    pub(crate) fn toggle_keyboard(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.toolbar.toggle_keyboard() {
            self.address_input.update(cx, |input, cx| input.focus(window, cx));
        } else {
            window.blur();
        }
        self.sync_page_overlay(window, cx);
        cx.notify();
    }

    pub(crate) fn handle_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let area = self.content_area(window);
        let Some(touch) = self.pointer.press(window_pos(event.position), area.origin_y, area.size) else {
            return;
        };
        self.route(touch, window, cx);
    }

    pub(crate) fn handle_mouse_move(&mut self, event: &MouseMoveEvent, window: &mut Window, cx: &mut Context<Self>) {
        if event.pressed_button != Some(MouseButton::Left) {
            return;
        }
        let area = self.content_area(window);
        let Some(touch) = self.pointer.drag(window_pos(event.position), area.origin_y, area.size) else {
            return;
        };
        self.route(touch, window, cx);
    }

    pub(crate) fn handle_mouse_up(&mut self, event: &MouseUpEvent, window: &mut Window, cx: &mut Context<Self>) {
        let area = self.content_area(window);
        let Some(touch) = self.pointer.release(window_pos(event.position), area.origin_y, area.size) else {
            return;
        };
        self.route(touch, window, cx);
    }

    /// Consumed events stop here; forwarded ones continue to the page
    fn route(&mut self, touch: TouchEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.dispatch(touch, window, cx).is_consumed() {
            cx.stop_propagation();
        }
    }

    fn dispatch(&mut self, touch: TouchEvent, window: &mut Window, cx: &mut Context<Self>) -> Routing {
        let routing = self.with_surface(window, cx, |this, surface| this.router.handle(touch, surface));
        if routing.is_consumed() {
            self.sync_page_overlay(window, cx);
            cx.notify();
        }
        routing
    }

    /// Handle everything the page bridge posted since the last call
    pub(crate) fn drain_page_messages(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(ref rx) = self.page_messages else {
            return;
        };
        let bodies: Vec<String> = rx.try_iter().collect();

        for body in bodies {
            let message = match PageMessage::parse(&body) {
                Ok(message) => message,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };
            match message {
                PageMessage::Ready => self.sync_page_overlay(window, cx),
                PageMessage::Keyboard => self.toggle_keyboard(window, cx),
                pointer => {
                    let area = self.content_area(window);
                    if let Some(touch) = self.pointer.page_event(pointer, area.size) {
                        // The page already swallowed the input, so a forward has nowhere to go
                        if !self.dispatch(touch, window, cx).is_consumed() {
                            debug!("Page reported {:?} outside Cursor mode", touch.kind());
                        }
                    }
                }
            }
        }
    }

    /// Push cursor and keyboard button state into the page
    pub(crate) fn sync_page_overlay(&self, window: &Window, cx: &App) {
        let Some(ref entity) = self.webview else {
            return;
        };
        let area = self.content_area(window);
        let overlay = PageOverlay::new(
            &self.router.cursor(),
            area.size.height(),
            self.settings.cursor_size,
            self.toolbar.keyboard_visible(),
        );
        let result = overlay
            .script()
            .and_then(|js| {
                entity
                    .read(cx)
                    .raw()
                    .evaluate_script(&js)
                    .map_err(|e| crate::error::SurfaceError::Script(e.to_string()))
            });
        if let Err(e) = result {
            warn!("Failed to update page overlay: {}", e);
        }
    }
}
