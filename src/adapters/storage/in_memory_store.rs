//! In-Memory Record Store Adapter
//!
//! Keeps the last saved dataset in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{RecordStore, StoreError};

/// In-memory storage for one dataset
#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Option<T>>>,
}

impl<T> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a store that already holds `records`
    pub fn with_records(records: T) -> Self {
        Self {
            records: Arc::new(RwLock::new(Some(records))),
        }
    }

    /// Whether anything has been saved
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_none()
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordStore<T> for InMemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Option<T>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &T) -> Result<(), StoreError> {
        *self.records.write().await = Some(records.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let store: InMemoryStore<Vec<u32>> = InMemoryStore::new();
        assert!(store.is_empty().await);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let store: InMemoryStore<Vec<u32>> = InMemoryStore::new();
        store.save(&vec![1, 2, 3]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store: InMemoryStore<Vec<u32>> = InMemoryStore::with_records(vec![1]);
        let other = store.clone();
        other.save(&vec![7]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(vec![7]));
    }
}
