//! Dataset - a store-backed collection held in memory.
//!
//! The dataset is loaded once at startup and written through to its
//! [`RecordStore`] after every mutation. Mutations are serialised by the
//! write lock; reads run concurrently.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::content::ContentError;
use crate::domain::strategy::StrategyError;
use crate::domain::visual::VisualError;
use crate::ports::{RecordStore, StoreError};

/// In-memory copy of a persisted dataset.
pub struct Dataset<T> {
    records: RwLock<T>,
    store: Arc<dyn RecordStore<T>>,
}

impl<T> Dataset<T>
where
    T: Clone + Default + Send + Sync,
{
    /// Loads the dataset, starting from `T::default()` when nothing is stored.
    pub async fn load(store: Arc<dyn RecordStore<T>>) -> Result<Self, StoreError> {
        let records = store.load().await?.unwrap_or_default();
        Ok(Self::with_records(records, store))
    }

    /// Wraps already-loaded records.
    pub fn with_records(records: T, store: Arc<dyn RecordStore<T>>) -> Self {
        Self {
            records: RwLock::new(records),
            store,
        }
    }

    /// Runs `f` against the current records.
    pub async fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R + Send,
    {
        let records = self.records.read().await;
        f(&records)
    }

    /// Applies `mutate` to a working copy, saves it, then makes it current.
    ///
    /// When `mutate` fails or the save fails the in-memory records are left
    /// untouched.
    pub async fn update<R, E, F>(&self, mutate: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E> + Send,
        R: Send,
        E: From<StoreError>,
    {
        let mut records = self.records.write().await;
        let mut working = records.clone();
        let result = mutate(&mut working)?;

        if let Err(e) = self.store.save(&working).await {
            tracing::error!(error = %e, "Failed to persist dataset");
            return Err(E::from(e));
        }

        *records = working;
        Ok(result)
    }
}

impl From<StoreError> for ContentError {
    fn from(err: StoreError) -> Self {
        ContentError::infrastructure(err.to_string())
    }
}

impl From<StoreError> for StrategyError {
    fn from(err: StoreError) -> Self {
        StrategyError::infrastructure(err.to_string())
    }
}

impl From<StoreError> for VisualError {
    fn from(err: StoreError) -> Self {
        VisualError::infrastructure(err.to_string())
    }
}
