//! File-backed store.
//!
//! File format: JSONL at the configured path (default `~/.signon/store.json`)
//! - Line 1: `{"_type":"metadata","createdAt":"...","updatedAt":"..."}`
//! - Line 2+: `{"key":"currentUser","value":"..."}`

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::KeyValueStore;

// ─────────────────────────────────────────────
// File records
// ─────────────────────────────────────────────

/// Metadata header written as the first line of the store file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreMetadata {
    #[serde(rename = "_type")]
    record_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// One key-value entry, one line per entry.
#[derive(Debug, Serialize, Deserialize)]
struct StoreEntry {
    key: String,
    value: String,
}

// ─────────────────────────────────────────────
// FileStore
// ─────────────────────────────────────────────

/// Durable [`KeyValueStore`] over a single JSONL file.
///
/// Entries are cached in memory behind an `RwLock`; every mutation rewrites
/// the whole file. Disk failures are logged and the in-memory view stays
/// authoritative for the rest of the process.
pub struct FileStore {
    /// Path of the JSONL store file.
    path: PathBuf,
    /// Creation timestamp, preserved across rewrites.
    created_at: DateTime<Utc>,
    /// In-memory view of the file.
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store file, loading any existing entries.
    ///
    /// `path` defaults to `~/.signon/store.json` if `None`. The parent
    /// directory is created if it doesn't exist; a missing file is an
    /// empty store.
    pub fn open(path: Option<PathBuf>) -> std::io::Result<Self> {
        let path = path.unwrap_or_else(crate::utils::get_store_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let (created_at, entries) = Self::load_from_disk(&path);

        Ok(FileStore {
            path,
            created_at,
            entries: RwLock::new(entries),
        })
    }

    /// Read the store file into a map, skipping unreadable lines.
    fn load_from_disk(path: &Path) -> (DateTime<Utc>, HashMap<String, String>) {
        let mut created_at = Utc::now();
        let mut entries = HashMap::new();

        let file = match std::fs::File::open(path) {
            Ok(f) => f,
            // Missing file is a fresh store.
            Err(_) => return (created_at, entries),
        };

        let reader = std::io::BufReader::new(file);
        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => continue,
            };

            if line.trim().is_empty() {
                continue;
            }

            // Try as metadata first
            if let Ok(meta) = serde_json::from_str::<StoreMetadata>(&line) {
                if meta.record_type == "metadata" {
                    created_at = meta.created_at;
                    continue;
                }
            }

            match serde_json::from_str::<StoreEntry>(&line) {
                Ok(entry) => {
                    entries.insert(entry.key, entry.value);
                }
                Err(e) => warn!("Skipping unreadable store line: {}", e),
            }
        }

        debug!(
            "Loaded {} entries from {}",
            entries.len(),
            path.display()
        );
        (created_at, entries)
    }

    /// Rewrite the store file from the given entries (overwrite).
    fn save_to_disk(&self, entries: &HashMap<String, String>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(&self.path)?;

        let meta = StoreMetadata {
            record_type: "metadata".to_string(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        };
        writeln!(file, "{}", serde_json::to_string(&meta)?)?;

        for (key, value) in entries {
            let entry = StoreEntry {
                key: key.clone(),
                value: value.clone(),
            };
            writeln!(file, "{}", serde_json::to_string(&entry)?)?;
        }

        Ok(())
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Err(e) = self.save_to_disk(entries) {
            warn!("Failed to persist store to {}: {}", self.path.display(), e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_store(dir: &tempfile::TempDir) -> FileStore {
        FileStore::open(Some(dir.path().join("store.json"))).unwrap()
    }

    #[test]
    fn set_get_remove() {
        let dir = tempdir().unwrap();
        let store = make_store(&dir);

        assert_eq!(store.get("currentUser"), None);

        store.set("currentUser", r#"{"loginToken":"tok"}"#);
        assert_eq!(
            store.get("currentUser").as_deref(),
            Some(r#"{"loginToken":"tok"}"#)
        );

        store.remove("currentUser");
        assert_eq!(store.get("currentUser"), None);
    }

    #[test]
    fn set_overwrites() {
        let dir = tempdir().unwrap();
        let store = make_store(&dir);

        store.set("k", "old");
        store.set("k", "new");
        assert_eq!(store.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn persistence_round_trip() {
        let dir = tempdir().unwrap();

        {
            let store = make_store(&dir);
            store.set("currentUser", "serialized-record");
            store.set("other", "value");
        }

        // A re-opened store loads the same entries from disk.
        {
            let store = make_store(&dir);
            assert_eq!(store.get("currentUser").as_deref(), Some("serialized-record"));
            assert_eq!(store.get("other").as_deref(), Some("value"));
        }
    }

    #[test]
    fn remove_persists() {
        let dir = tempdir().unwrap();

        {
            let store = make_store(&dir);
            store.set("currentUser", "record");
            store.remove("currentUser");
        }

        {
            let store = make_store(&dir);
            assert_eq!(store.get("currentUser"), None);
        }
    }

    #[test]
    fn file_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open(Some(path.clone())).unwrap();

        store.set("currentUser", "record");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2); // 1 metadata + 1 entry

        let meta: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(meta["_type"], "metadata");
        assert!(meta.get("createdAt").is_some());

        let entry: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(entry["key"], "currentUser");
        assert_eq!(entry["value"], "record");
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(
            &path,
            "not json at all\n{\"key\":\"good\",\"value\":\"kept\"}\n{\"key\":42}\n",
        )
        .unwrap();

        let store = FileStore::open(Some(path)).unwrap();
        assert_eq!(store.get("good").as_deref(), Some("kept"));
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn created_at_survives_rewrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let first_created = {
            let store = FileStore::open(Some(path.clone())).unwrap();
            store.set("a", "1");
            store.created_at
        };

        let store = FileStore::open(Some(path)).unwrap();
        store.set("b", "2");
        assert_eq!(store.created_at, first_created);
    }
}
