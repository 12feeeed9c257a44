//! In-page bridge between the web view and the input core.
//!
//! A native child web view is stacked above every toolkit-drawn element, so an
//! overlay painted by the shell is hidden behind the page and never sees the
//! pointer. Instead, [`PAGE_BRIDGE_SCRIPT`] is installed as an initialization
//! script on every document:
//!
//! - while Cursor mode is on it captures pointer input before the page does
//!   and posts it over IPC as a [`PageMessage`]
//! - it draws the cursor icon and the keyboard button inside the page, driven
//!   by [`PageOverlay::script`]
//!
//! Untrusted clicks (the ones the surface synthesizes) always pass through.

use crate::constants::{KEYBOARD_BUTTON_ANCHOR, KEYBOARD_BUTTON_SIZE, KEYBOARD_LABEL};
use crate::cursor::CursorState;
use crate::error::SurfaceError;
use serde::{Deserialize, Serialize};

/// Message posted by the page through `window.ipc.postMessage`.
///
/// Positions are page viewport coordinates (top-left origin), which coincide
/// with the content area.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageMessage {
    /// A document finished loading and needs the overlay state
    Ready,
    /// The in-page keyboard button was pressed
    Keyboard,
    Down {
        x: f32,
        y: f32,
    },
    Move {
        x: f32,
        y: f32,
    },
    Up {
        x: f32,
        y: f32,
    },
}

impl PageMessage {
    pub fn parse(body: &str) -> Result<Self, SurfaceError> {
        serde_json::from_str(body).map_err(|e| SurfaceError::PageMessage(e.to_string()))
    }
}

/// Top-left corner of the cursor icon in viewport coordinates.
///
/// The icon's bottom-left corner sits on the cursor position.
#[inline]
pub fn cursor_icon_origin(cursor: &CursorState, surface_height: f32, icon_size: f32) -> (f32, f32) {
    (cursor.x(), surface_height - cursor.y() - icon_size)
}

/// State pushed into the page after every change that affects the overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOverlay {
    /// Capture pointer input and show the cursor icon
    pub cursor_mode: bool,
    pub cursor_left: f32,
    pub cursor_top: f32,
    pub cursor_size: f32,
    pub keyboard_active: bool,
    pub keyboard_size: f32,
    /// Distance of the keyboard button from the bottom, as a fraction of the height
    pub keyboard_anchor: f32,
    pub keyboard_label: &'static str,
}

impl PageOverlay {
    pub fn new(cursor: &CursorState, surface_height: f32, cursor_size: f32, keyboard_active: bool) -> Self {
        let (cursor_left, cursor_top) = cursor_icon_origin(cursor, surface_height, cursor_size);
        Self {
            cursor_mode: cursor.mode().is_cursor(),
            cursor_left,
            cursor_top,
            cursor_size,
            keyboard_active,
            keyboard_size: KEYBOARD_BUTTON_SIZE,
            keyboard_anchor: KEYBOARD_BUTTON_ANCHOR,
            keyboard_label: KEYBOARD_LABEL,
        }
    }

    /// Script applying this state; a no-op on pages where the bridge is missing
    pub fn script(&self) -> Result<String, SurfaceError> {
        let json = serde_json::to_string(self).map_err(|e| SurfaceError::Script(e.to_string()))?;
        Ok(format!(
            "if (window.__touchbrowser) {{ window.__touchbrowser.sync({}); }}",
            json
        ))
    }
}

/// Initialization script installed on every document the web view loads
pub const PAGE_BRIDGE_SCRIPT: &str = r#"(function() {
  if (window.__touchbrowser) { return; }
  var state = { cursorMode: false, pointer: null, cursor: null, keyboard: null };
  var layer = 2147483647;

  function post(message) {
    if (window.ipc) { window.ipc.postMessage(JSON.stringify(message)); }
  }
  function onKeyboard(e) {
    return state.keyboard !== null && state.keyboard.contains(e.target);
  }
  function swallow(e) {
    e.preventDefault();
    e.stopImmediatePropagation();
  }
  function pointer(type) {
    return function(e) {
      if (!state.cursorMode || !e.isTrusted || onKeyboard(e)) { return; }
      swallow(e);
      if (type === 'down') {
        state.pointer = e.pointerId;
      } else if (state.pointer !== e.pointerId) {
        return;
      }
      if (type === 'up') { state.pointer = null; }
      post({ type: type, x: e.clientX, y: e.clientY });
    };
  }
  function block(e) {
    if (state.cursorMode && e.isTrusted && !onKeyboard(e)) { swallow(e); }
  }

  var options = { capture: true, passive: false };
  window.addEventListener('pointerdown', pointer('down'), options);
  window.addEventListener('pointermove', pointer('move'), options);
  window.addEventListener('pointerup', pointer('up'), options);
  window.addEventListener('pointercancel', pointer('up'), options);
  ['mousedown', 'mouseup', 'click', 'dblclick', 'contextmenu', 'touchstart', 'touchmove', 'touchend']
    .forEach(function(type) { window.addEventListener(type, block, options); });

  function overlays() {
    if (state.cursor === null) {
      state.cursor = document.createElement('div');
      state.cursor.style.cssText = 'position:fixed;pointer-events:none;box-sizing:border-box;' +
        'border-radius:50%;border:2px solid #1f2937;background:rgba(59,130,246,0.6);z-index:' + layer;
      document.documentElement.appendChild(state.cursor);
    }
    if (state.keyboard === null) {
      state.keyboard = document.createElement('button');
      state.keyboard.style.cssText = 'position:fixed;right:0;margin:0;padding:0;border:1px solid #9ca3af;' +
        'border-radius:6px;font:12px sans-serif;z-index:' + layer;
      state.keyboard.addEventListener('click', function(e) {
        swallow(e);
        post({ type: 'keyboard' });
      }, true);
      document.documentElement.appendChild(state.keyboard);
    }
  }

  function sync(overlay) {
    overlays();
    state.cursorMode = overlay.cursor_mode;
    if (!overlay.cursor_mode) { state.pointer = null; }
    document.documentElement.style.touchAction = overlay.cursor_mode ? 'none' : '';

    var cursor = state.cursor.style;
    cursor.display = overlay.cursor_mode ? 'block' : 'none';
    cursor.left = overlay.cursor_left + 'px';
    cursor.top = overlay.cursor_top + 'px';
    cursor.width = overlay.cursor_size + 'px';
    cursor.height = overlay.cursor_size + 'px';

    var keyboard = state.keyboard;
    keyboard.textContent = overlay.keyboard_label;
    keyboard.style.width = overlay.keyboard_size + 'px';
    keyboard.style.height = overlay.keyboard_size + 'px';
    keyboard.style.bottom = (overlay.keyboard_anchor * 100) + '%';
    keyboard.style.background = overlay.keyboard_active ? '#3b82f6' : '#f9fafb';
    keyboard.style.color = overlay.keyboard_active ? '#ffffff' : '#111827';
  }

  window.__touchbrowser = { sync: sync };

  if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', function() { post({ type: 'ready' }); });
  } else {
    post({ type: 'ready' });
  }
})();"#;
