//! JSON file-based storage implementation.
//!
//! This storage backend stores each key as a separate JSON file.
//! Keys are mapped to file paths: `["sketchpad", "history"]` ->
//! `sketchpad/history.json` under the base directory.

use crate::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// JSON file-based storage.
#[derive(Clone)]
pub struct JsonStorage {
    base_path: PathBuf,
}

impl JsonStorage {
    /// Create a new JSON storage at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Get the file path for a key.
    fn key_to_path(&self, key: &[&str]) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::invalid_key("Key cannot be empty"));
        }

        // Validate key components (no path traversal)
        for component in key {
            if component.is_empty()
                || component.contains('/')
                || component.contains('\\')
                || *component == "."
                || *component == ".."
            {
                return Err(StorageError::invalid_key(format!(
                    "Invalid key component: {}",
                    component
                )));
            }
        }

        let mut path = self.base_path.clone();
        for component in key {
            path.push(component);
        }
        path.set_extension("json");

        Ok(path)
    }
}

#[async_trait]
impl Storage for JsonStorage {
    async fn read<T: DeserializeOwned + Send>(&self, key: &[&str]) -> StorageResult<Option<T>> {
        let path = self.key_to_path(key)?;
        debug!(path = %path.display(), "Reading from storage");

        match fs::read_to_string(&path).await {
            Ok(content) => {
                let value: T = serde_json::from_str(&content)?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn write<T: Serialize + Send + Sync>(
        &self,
        key: &[&str],
        value: &T,
    ) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        debug!(path = %path.display(), "Writing to storage");

        // Create parent directories
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Serialize to JSON
        let content = serde_json::to_string_pretty(value)?;

        // Write atomically (write to temp file, then rename)
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content).await?;
        fs::rename(&temp_path, &path).await?;

        Ok(())
    }

    async fn remove(&self, key: &[&str]) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        debug!(path = %path.display(), "Removing from storage");

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn exists(&self, key: &[&str]) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(path.exists())
    }
}

/// Create a storage instance at the default data directory.
///
/// Returns `None` when the platform data directory cannot be resolved; the
/// session then runs in-memory only.
pub fn default_storage() -> Option<JsonStorage> {
    sketchpad_util::path::data_dir().map(|p| JsonStorage::new(p.join("data")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use sketchpad_history::{Snapshot, VersionHistory};
    use tempfile::tempdir;

    const KEY: [&str; 2] = ["sketchpad", "history"];

    fn history(texts: &[&str]) -> VersionHistory {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 5).unwrap();
        let snapshots = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Snapshot::new(*text, t0 + Duration::seconds(i as i64)))
            .collect();
        VersionHistory::from_snapshots(snapshots)
    }

    #[tokio::test]
    async fn test_history_blob_roundtrip() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let written = history(&["Hi", "Hi there"]);
        storage.write(&KEY, &written).await.unwrap();

        let read: VersionHistory = storage.read(&KEY).await.unwrap().unwrap();
        assert_eq!(read.snapshots(), written.snapshots());
    }

    #[tokio::test]
    async fn test_read_not_found() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let read: Option<VersionHistory> = storage.read(&KEY).await.unwrap();
        assert!(read.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_keeps_latest_sequence() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        // The whole sequence is rewritten on every change
        storage.write(&KEY, &history(&["Hi"])).await.unwrap();
        storage
            .write(&KEY, &history(&["Hi", "Hi there"]))
            .await
            .unwrap();

        let read: VersionHistory = storage.read(&KEY).await.unwrap().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read.latest().unwrap().text, "Hi there");
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        storage.write(&KEY, &history(&["Hi"])).await.unwrap();
        assert!(storage.exists(&KEY).await.unwrap());

        storage.remove(&KEY).await.unwrap();
        assert!(!storage.exists(&KEY).await.unwrap());

        // Removing again is fine
        storage.remove(&KEY).await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_record_is_a_json_error() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        std::fs::create_dir_all(dir.path().join("sketchpad")).unwrap();
        std::fs::write(dir.path().join("sketchpad/history.json"), "{not json").unwrap();

        let read = storage.read::<VersionHistory>(&KEY).await;
        assert!(matches!(read, Err(StorageError::Json(_))));
    }

    #[tokio::test]
    async fn test_invalid_key() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let value = history(&[]);

        // Empty key
        assert!(storage.write(&[], &value).await.is_err());

        // Path traversal attempt
        assert!(storage
            .write(&["..", "etc", "passwd"], &value)
            .await
            .is_err());

        // Slash in component
        assert!(storage.write(&["path/traversal"], &value).await.is_err());
    }
}
