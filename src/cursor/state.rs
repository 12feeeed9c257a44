//! Cursor state - interaction mode and virtual pointer position.
//!
//! ## State Transitions
//!
//! ```text
//! Direct -> Cursor    (mode button)
//! Cursor -> Direct    (mode button)
//! ```
//!
//! There are no guards and no terminal state. The state lives as long as the
//! rendering surface.
//!
//! ## Coordinates
//!
//! `position` is surface-local with the origin at the bottom-left corner and Y
//! increasing upward, matching the input system. The document uses a top-left
//! origin; see [`crate::input::coords`] for the transform.

use crate::constants::{MODE_LABEL_CURSOR, MODE_LABEL_DIRECT};
use crate::surface::SurfaceSize;

/// How touch input on the surface is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Touches pass through to the page's native scrolling
    #[default]
    Direct,
    /// Touches drive the virtual cursor and synthesize clicks
    Cursor,
}

impl InteractionMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Direct => Self::Cursor,
            Self::Cursor => Self::Direct,
        }
    }

    pub fn is_cursor(self) -> bool {
        matches!(self, Self::Cursor)
    }

    /// Label shown on the mode button
    pub fn label(self) -> &'static str {
        match self {
            Self::Direct => MODE_LABEL_DIRECT,
            Self::Cursor => MODE_LABEL_CURSOR,
        }
    }
}

/// Snapshot of the virtual cursor.
///
/// `visible` always equals `mode == Cursor`, and `position` always lies inside
/// the surface bounds. Only [`CursorController`](super::CursorController) can
/// produce a changed state, so both hold for every value handed out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    position: (f32, f32),
    mode: InteractionMode,
    visible: bool,
}

impl CursorState {
    /// Direct mode, hidden cursor at the center of `size`
    pub(crate) fn centered(size: SurfaceSize) -> Self {
        Self {
            position: size.center(),
            mode: InteractionMode::Direct,
            visible: false,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.0
    }

    pub fn y(&self) -> f32 {
        self.position.1
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
        self.visible = mode.is_cursor();
    }

    pub(crate) fn set_position(&mut self, position: (f32, f32)) {
        self.position = position;
    }
}
