//! Virtual cursor for operating pages without direct touch.
//!
//! - `state` - interaction mode and the cursor snapshot
//! - `controller` - the only place cursor state is mutated

mod controller;
mod state;

pub use controller::CursorController;
pub use state::{CursorState, InteractionMode};
