//! Key-value snapshot persistence
//!
//! Durable state is four independent JSON snapshots in the data directory,
//! one per namespaced key. A missing or corrupt snapshot falls back to the
//! type's default; there is no migration or versioning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Snapshot key family
pub const WORD_PROGRESS: &str = "word-progress";
pub const SONG_PROGRESS: &str = "song-progress";
pub const USER_STATS: &str = "user-stats";
pub const ACHIEVEMENTS: &str = "achievements";

const KEYS: [&str; 4] = [WORD_PROGRESS, SONG_PROGRESS, USER_STATS, ACHIEVEMENTS];

/// Failure writing or parsing a snapshot
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access snapshot {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode snapshot {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

fn snapshot_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Load one snapshot, falling back to the default on any failure
///
/// Corruption is logged and swallowed; the caller always gets a usable
/// value.
pub fn load_key<T: DeserializeOwned + Default>(dir: &Path, key: &str) -> T {
    let path = snapshot_path(dir, key);

    if !path.exists() {
        return T::default();
    }

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!("could not read snapshot {key}: {err}");
            return T::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("snapshot {key} is corrupt, starting fresh: {err}");
            T::default()
        }
    }
}

/// Write one snapshot
pub fn save_key<T: Serialize>(dir: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    fs::create_dir_all(dir).map_err(|source| StorageError::Io { key: key.into(), source })?;

    let contents = serde_json::to_string_pretty(value)
        .map_err(|source| StorageError::Encode { key: key.into(), source })?;

    fs::write(snapshot_path(dir, key), contents)
        .map_err(|source| StorageError::Io { key: key.into(), source })
}

/// Remove every snapshot in the key family
pub fn clear(dir: &Path) {
    for key in KEYS {
        let path = snapshot_path(dir, key);
        if path.exists() {
            if let Err(err) = fs::remove_file(&path) {
                tracing::warn!("could not remove snapshot {key}: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn missing_key_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let value: HashMap<String, u32> = load_key(dir.path(), USER_STATS);
        assert!(value.is_empty());
    }

    #[test]
    fn corrupt_key_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        fs::write(snapshot_path(dir.path(), USER_STATS), "{not json").unwrap();

        let value: HashMap<String, u32> = load_key(dir.path(), USER_STATS);
        assert!(value.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut value = HashMap::new();
        value.insert("w1".to_string(), 3u32);

        save_key(dir.path(), WORD_PROGRESS, &value).unwrap();
        let loaded: HashMap<String, u32> = load_key(dir.path(), WORD_PROGRESS);
        assert_eq!(loaded, value);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");

        save_key(&nested, USER_STATS, &42u32).unwrap();
        let loaded: u32 = load_key(&nested, USER_STATS);
        assert_eq!(loaded, 42);
    }

    #[test]
    fn clear_removes_all_keys() {
        let dir = TempDir::new().unwrap();
        for key in KEYS {
            save_key(dir.path(), key, &1u32).unwrap();
        }

        clear(dir.path());

        for key in KEYS {
            assert!(!snapshot_path(dir.path(), key).exists(), "{key} should be gone");
        }
    }
}
