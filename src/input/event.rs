//! Raw touch events and routing outcomes.

/// Phase of a touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Down,
    Move,
    Up,
}

/// One touch frame delivered by the platform input system.
///
/// Positions are surface-local with a bottom-left origin. Deltas only exist on
/// `Move` and are relative to the previous frame of the same gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down {
        x: f32,
        y: f32,
    },
    Move {
        delta_x: f32,
        delta_y: f32,
        x: f32,
        y: f32,
    },
    Up {
        x: f32,
        y: f32,
    },
}

impl TouchEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self::Down { x, y }
    }

    pub fn moved(delta_x: f32, delta_y: f32, x: f32, y: f32) -> Self {
        Self::Move {
            delta_x,
            delta_y,
            x,
            y,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::Up { x, y }
    }

    pub fn kind(&self) -> TouchKind {
        match self {
            Self::Down { .. } => TouchKind::Down,
            Self::Move { .. } => TouchKind::Move,
            Self::Up { .. } => TouchKind::Up,
        }
    }

    /// Absolute touch position
    pub fn position(&self) -> (f32, f32) {
        match *self {
            Self::Down { x, y } | Self::Move { x, y, .. } | Self::Up { x, y } => (x, y),
        }
    }

    /// Drag delta, zero for anything but `Move`
    pub fn delta(&self) -> (f32, f32) {
        match *self {
            Self::Move {
                delta_x, delta_y, ..
            } => (delta_x, delta_y),
            _ => (0.0, 0.0),
        }
    }
}

/// What the router did with an event
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    /// Handled locally; the page must not see it
    Consumed,
    /// Pass to the page's native touch handling unmodified
    Forwarded,
}

impl Routing {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
