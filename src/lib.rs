//! Touch browser - a full-screen web view with a virtual cursor overlay.
//!
//! Touches on the page either scroll it directly or, in cursor mode, drag a
//! virtual mouse pointer and click where it points.
//!
//! The input core (`cursor`, `input`, `surface`) has no platform dependencies.
//! The gpui/wry desktop shell is behind the `shell` feature.

pub mod address;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod input;
pub mod settings;
pub mod settings_watcher;
pub mod surface;
pub mod toolbar;

#[cfg(feature = "shell")]
pub mod shell;
