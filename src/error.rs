//! Error types for the browser shell.
//!
//! The input core itself cannot fail. These errors come from the boundary with
//! the rendering surface and from the settings file.

use thiserror::Error;

/// Errors reported by a [`RenderingSurface`](crate::surface::RenderingSurface)
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// The web view hasn't been created yet
    #[error("Rendering surface not ready")]
    NotReady,

    /// Navigation request was refused by the web view
    #[error("Failed to load {address}: {reason}")]
    Load { address: String, reason: String },

    /// Script evaluation failed or couldn't be built
    #[error("Script error: {0}")]
    Script(String),

    /// Address bar text can't be turned into an address
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    /// A message posted by the page could not be understood
    #[error("Malformed page message: {0}")]
    PageMessage(String),
}

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
