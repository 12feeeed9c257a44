//! User settings persisted as JSON in the platform config directory.
//!
//! Missing fields fall back to defaults, so older settings files keep working.

use crate::constants::{
    APP_DIR_NAME, CURSOR_SIZE, DEFAULT_HOME_ADDRESS, SETTINGS_FILE_NAME, TOOLBAR_HEIGHT_FRACTION,
};
use crate::error::SettingsResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address loaded on startup
    pub home_address: String,
    /// Script execution on the web view. Synthetic clicks need it.
    pub javascript_enabled: bool,
    /// Cursor icon side length in pixels
    pub cursor_size: f32,
    /// Toolbar height as a fraction of the window height
    pub toolbar_height_fraction: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            home_address: DEFAULT_HOME_ADDRESS.to_string(),
            javascript_enabled: true,
            cursor_size: CURSOR_SIZE,
            toolbar_height_fraction: TOOLBAR_HEIGHT_FRACTION,
        }
    }
}

/// Path of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Names of the fields that differ from `previous` but only take effect
    /// when the web view is rebuilt (on the next launch).
    pub fn restart_required(&self, previous: &Settings) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.home_address != previous.home_address {
            fields.push("home_address");
        }
        if self.javascript_enabled != previous.javascript_enabled {
            fields.push("javascript_enabled");
        }
        fields
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cursor_size.is_finite() && self.cursor_size > 0.0) {
            self.cursor_size = defaults.cursor_size;
        }
        if !(self.toolbar_height_fraction > 0.0 && self.toolbar_height_fraction < 1.0) {
            self.toolbar_height_fraction = defaults.toolbar_height_fraction;
        }
        if self.home_address.trim().is_empty() {
            self.home_address = defaults.home_address;
        }
        self
    }
}
