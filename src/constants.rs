//! Application-wide constants.
//!
//! Centralizes layout values and defaults so the shell, the settings file and
//! the tests agree on them.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the toolbar as a fraction of the window height
pub const TOOLBAR_HEIGHT_FRACTION: f32 = 0.08;

/// Width of the GO and mode buttons as a fraction of the toolbar width
pub const TOOLBAR_BUTTON_FRACTION: f32 = 0.2;

/// Side length of the square cursor icon in pixels
pub const CURSOR_SIZE: f32 = 30.0;

/// Side length of the square keyboard toggle button in pixels
pub const KEYBOARD_BUTTON_SIZE: f32 = 50.0;

/// Vertical anchor of the keyboard button, as a fraction of window height from the bottom
pub const KEYBOARD_BUTTON_ANCHOR: f32 = 0.2;

/// Fallback surface size used before the platform reports real dimensions
pub const DEFAULT_SURFACE_SIZE: (f32, f32) = (600.0, 800.0);

// ============================================================================
// Navigation
// ============================================================================

/// Address loaded on startup and shown in the address bar
pub const DEFAULT_HOME_ADDRESS: &str = "https://google.com";

/// Prefix for address bar text that doesn't look like an address
pub const SEARCH_PREFIX: &str = "https://www.google.com/search?q=";

// ============================================================================
// Labels
// ============================================================================

pub const MODE_LABEL_CURSOR: &str = "Mouse: ON";
pub const MODE_LABEL_DIRECT: &str = "Mouse: OFF";
pub const GO_LABEL: &str = "GO";
pub const KEYBOARD_LABEL: &str = "KB";

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "touchbrowser";

/// Settings file name inside [`APP_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";
