//! Shell view tree: toolbar on top, web view below, cursor icon and keyboard
//! button layered over the content area.

use super::BrowserShell;
use crate::constants::{GO_LABEL, KEYBOARD_BUTTON_ANCHOR, KEYBOARD_BUTTON_SIZE, KEYBOARD_LABEL};
use crate::surface::cursor_icon_origin;
use crate::toolbar::ToolbarState;
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::Input;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

impl BrowserShell {
    fn render_toolbar(&self, toolbar_height: f32, cx: &mut Context<Self>) -> impl IntoElement {
        let mode = self.router.mode();

        h_flex()
            .w_full()
            .h(px(toolbar_height))
            .gap(px(4.0))
            .px(px(4.0))
            .bg(cx.theme().background)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(div().flex_1().child(Input::new(&self.address_input).size_full()))
            .child(
                Button::new("go")
                    .label(GO_LABEL)
                    .primary()
                    .on_click(cx.listener(|this, _, window, cx| this.go(window, cx))),
            )
            .child(
                Button::new("mode")
                    .label(ToolbarState::mode_label(mode))
                    .when(mode.is_cursor(), |b| b.primary())
                    .on_click(cx.listener(|this, _, window, cx| this.toggle_mode(window, cx))),
            )
    }

    /// Cursor icon, bottom-left corner at the cursor position
    fn render_cursor(&self, surface_height: f32, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let cursor = self.router.cursor();
        if !cursor.visible() {
            return None;
        }
        let size = self.settings.cursor_size;
        let (left, top) = cursor_icon_origin(&cursor, surface_height, size);

        Some(
            div()
                .absolute()
                .left(px(left))
                .top(px(top))
                .size(px(size))
                .rounded_full()
                .border_2()
                .border_color(cx.theme().foreground)
                .bg(cx.theme().primary.opacity(0.6)),
        )
    }

    fn render_keyboard_button(&self, surface_height: f32, cx: &mut Context<Self>) -> impl IntoElement {
        let bottom = surface_height * KEYBOARD_BUTTON_ANCHOR;

        div()
            .absolute()
            .right(px(0.0))
            .top(px(surface_height - bottom - KEYBOARD_BUTTON_SIZE))
            .size(px(KEYBOARD_BUTTON_SIZE))
            .child(
                Button::new("keyboard")
                    .label(KEYBOARD_LABEL)
                    .when(self.toolbar.keyboard_visible(), |b| b.primary())
                    .on_click(cx.listener(|this, _, window, cx| this.toggle_keyboard(window, cx))),
            )
    }
}

impl Render for BrowserShell {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.check_settings_reload(window, cx);

        let area = self.content_area(window);
        if self.last_size != Some(area.size) {
            self.router.surface_resized(area.size);
            self.last_size = Some(area.size);
            self.sync_page_overlay(window, cx);
        }

        let mut content = div()
            .relative()
            .w_full()
            .flex_1()
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up));

        // Once the web view exists it covers this area and draws the overlay itself
        content = match self.webview {
            Some(ref webview) => content.child(div().size_full().child(webview.clone())),
            None => content
                .children(self.render_cursor(area.size.height(), cx))
                .child(self.render_keyboard_button(area.size.height(), cx)),
        };

        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .child(self.render_toolbar(area.origin_y, cx))
            .child(content)
    }
}
