//! Touch input handling for the rendering surface.
//!
//! Every raw touch event enters [`InputRouter`] first. In Direct mode it is
//! forwarded untouched to the page. In Cursor mode it drives the virtual
//! cursor and synthesizes clicks.
//!
//! ## Modules
//!
//! - `event` - touch events and routing outcomes
//! - `router` - mode check and dispatch
//! - `drag` - move handling (relative cursor drag)
//! - `tap` - down/up handling (synthetic click)
//! - `coords` - surface/content coordinate conversion
//! - `pointer` - desktop mouse to touch event adaptation

pub mod coords;
mod drag;
mod event;
mod pointer;
mod router;
mod tap;

pub use coords::{ContentClickTarget, CoordinateConverter};
pub use event::{Routing, TouchEvent, TouchKind};
pub use pointer::PointerAdapter;
pub use router::InputRouter;
