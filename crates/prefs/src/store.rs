//! The persistence port.
//!
//! Bookmarks and saved searches only need "remember this string under that
//! key across sessions". Any concrete store (a file per key, browser-style
//! local storage, a remote KV service) satisfies the port; nothing above it
//! may assume a particular technology.

use crate::error::{PrefsError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Keyed string persistence.
///
/// `load` fails soft: any read problem (absent key, unreadable backing
/// store) is reported as absence, never as an error.
pub trait PrefStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, payload: &str) -> Result<()>;
}

/// File-per-key store: `<dir>/<key>.json`.
#[derive(Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PrefStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, payload: &str) -> Result<()> {
        let wrap = |source| PrefsError::Save {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(wrap)?;
        fs::write(self.path_for(key), payload).map_err(wrap)
    }
}

/// In-memory store for tests and embedding.
///
/// Clones share the same map, so a test can hand one clone to `Bookmarks`
/// and inspect what was persisted through another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to simulate a previous session.
    pub fn preload(&self, key: &str, payload: &str) {
        self.lock().insert(key.to_string(), payload.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock still holds valid string data.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PrefStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn save(&self, key: &str, payload: &str) -> Result<()> {
        self.lock().insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
