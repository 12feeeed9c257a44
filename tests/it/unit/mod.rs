//! Unit tests for the touch browser.

mod coords_tests;
mod settings_tests;
mod settings_watcher_tests;
