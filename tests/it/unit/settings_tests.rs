//! Unit tests for settings persistence.

use std::fs;
use tempfile::tempdir;
use touchbrowser::error::SettingsError;
use touchbrowser::settings::Settings;

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        home_address: "https://example.com".to_string(),
        javascript_enabled: false,
        cursor_size: 42.0,
        toolbar_height_fraction: 0.1,
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = Settings::load_from(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_corrupt_file_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_out_of_range_values_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"cursor_size": 0.0, "toolbar_height_fraction": 1.5}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.cursor_size, 30.0);
    assert_eq!(loaded.toolbar_height_fraction, 0.08);
}
