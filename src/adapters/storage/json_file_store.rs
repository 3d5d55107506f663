//! File-based Record Store Adapter
//!
//! Stores a whole dataset as one pretty-printed JSON document.
//!
//! # Atomic Writes
//!
//! Saves use a write-to-temp-then-rename pattern:
//! 1. Write the document to `<file>.tmp`
//! 2. Sync to disk
//! 3. Rename over `<file>`
//!
//! A crash mid-save leaves the previous document intact.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{RecordStore, StoreError};

/// JSON file storage for one dataset
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Create a store backed by the file at `path`
    ///
    /// # Example
    /// ```ignore
    /// let store: JsonFileStore<ContentLibrary> = JsonFileStore::new("./data/content.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _records: PhantomData,
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).await.map_err(|e| {
                StoreError::Io(format!("Failed to create {}: {}", dir.display(), e))
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Option<T>, StoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let records = serde_json::from_str(&json)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;
        Ok(Some(records))
    }

    async fn save(&self, records: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.ensure_parent_dir().await?;
        let temp_path = self.temp_path();

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StoreError::Io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.write_all(json.as_bytes()).await.map_err(|e| {
            StoreError::Io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.sync_all().await.map_err(|e| {
            StoreError::Io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StoreError::Io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Notes {
        items: Vec<String>,
    }

    fn notes() -> Notes {
        Notes {
            items: vec!["first".to_string(), "second".to_string()],
        }
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store: JsonFileStore<Notes> = JsonFileStore::new(temp_dir.path().join("notes.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store: JsonFileStore<Notes> = JsonFileStore::new(temp_dir.path().join("notes.json"));

        store.save(&notes()).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, Some(notes()));
    }

    #[tokio::test]
    async fn save_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("notes.json");
        let store: JsonFileStore<Notes> = JsonFileStore::new(&path);

        store.save(&notes()).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_and_writes_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");
        let store: JsonFileStore<Notes> = JsonFileStore::new(&path);

        store.save(&notes()).await.unwrap();

        assert!(!temp_dir.path().join("notes.json.tmp").exists());
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"items\""));
    }

    #[tokio::test]
    async fn later_save_replaces_earlier() {
        let temp_dir = TempDir::new().unwrap();
        let store: JsonFileStore<Notes> = JsonFileStore::new(temp_dir.path().join("notes.json"));

        store.save(&notes()).await.unwrap();
        store.save(&Notes::default()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(Notes::default()));
    }

    #[tokio::test]
    async fn malformed_document_is_a_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store: JsonFileStore<Notes> = JsonFileStore::new(&path);

        assert!(matches!(
            store.load().await,
            Err(StoreError::Deserialization(_))
        ));
    }
}
