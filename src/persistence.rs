//! Key/value storage port for persisted numeric values.
//!
//! The core persists exactly one number (the high score), but the port keeps
//! storage swappable: an in-memory stand-in for tests and an on-disk JSON
//! store for native sessions. All I/O is best-effort; failures degrade to
//! defaults and are logged, never surfaced to gameplay.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Get-or-set access to named numeric values.
pub trait ScoreStore: std::fmt::Debug {
    /// Returns the stored value, or `None` when the key was never written.
    fn get_number(&self, key: &str) -> Option<f64>;
    fn set_number(&mut self, key: &str, value: f64);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get_number(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set_number(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_owned(), value);
    }
}

/// On-disk envelope for [`JsonFileStore`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    values: BTreeMap<String, f64>,
}

/// JSON-file-backed store. The file is read once at open; every write saves
/// the whole map back.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    /// Open a store at `path`. A missing file starts empty; a corrupt file
    /// is ignored and will be overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => data,
                Err(e) => {
                    log::warn!("Ignoring corrupt store {}: {e}", path.display());
                    StoreData::default()
                }
            },
            Err(_) => StoreData::default(),
        };
        Self { path, data }
    }

    fn save(&self) {
        match serde_json::to_string_pretty(&self.data) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    log::warn!("Failed to write {}: {e}", self.path.display());
                }
            }
            Err(e) => log::warn!("Failed to encode store: {e}"),
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn get_number(&self, key: &str) -> Option<f64> {
        self.data.values.get(key).copied()
    }

    fn set_number(&mut self, key: &str, value: f64) {
        self.data.values.insert(key.to_owned(), value);
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_number("highscore"), None);
        store.set_number("highscore", 4200.0);
        assert_eq!(store.get_number("highscore"), Some(4200.0));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get_number("highscore"), None);
        store.set_number("highscore", 1234.0);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get_number("highscore"), Some(1234.0));
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json {{{").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get_number("highscore"), None);
    }
}
