//! Unit tests for settings_watcher module.

use std::fs;
use std::io::Write;
use tempfile::tempdir;
use touchbrowser::settings_watcher::{default_settings_path, SettingsWatcher};

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone());
    assert!(watcher.is_ok());
    assert_eq!(watcher.unwrap().path(), settings_path.as_path());
}

#[test]
fn test_default_paths() {
    let settings = default_settings_path();
    assert!(settings.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = settings {
        assert!(path.ends_with("touchbrowser/settings.json"));
    }
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist").join("settings.json");
    assert!(SettingsWatcher::new(path).is_err());
}

/// Ignored: file system event delivery is timing-dependent and not
/// deterministic in CI.
#[test]
#[ignore]
fn test_file_modification_detection() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&settings_path)
        .unwrap();
    writeln!(file, "{{\"cursor_size\": 40.0}}").unwrap();
    file.sync_all().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(500));
    assert!(watcher.poll().is_some());
}
