//! Settings file watcher for hot reload.
//!
//! Watches the settings file's directory so that editors which replace the
//! file atomically are picked up too. The shell polls once per frame.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

pub use crate::settings::default_settings_path;

/// A change to the watched settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`. Its parent directory must exist.
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next event for the settings file, without blocking
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(e) = self.classify(&event) {
                        return Some(e);
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error("watcher disconnected".to_string()));
                }
            }
        }
    }

    fn classify(&self, event: &Event) -> Option<SettingsEvent> {
        let file_name = self.path.file_name()?;
        if !event.paths.iter().any(|p| p.file_name() == Some(file_name)) {
            return None;
        }
        classify_kind(&event.kind)
    }
}

fn classify_kind(kind: &EventKind) -> Option<SettingsEvent> {
    match kind {
        EventKind::Create(_) => Some(SettingsEvent::Created),
        EventKind::Modify(_) => Some(SettingsEvent::Modified),
        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
        _ => None,
    }
}
