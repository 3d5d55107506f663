//! Record Store Port - Interface for persisting a whole dataset.
//!
//! A dataset is stored and loaded as one document. Concurrent writers are
//! not coordinated: the last save wins.

use async_trait::async_trait;

/// Errors that can occur during record store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize records: {0}")]
    Serialization(String),

    #[error("Failed to deserialize records: {0}")]
    Deserialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Port for loading and saving one dataset of type `T`
#[async_trait]
pub trait RecordStore<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Load the stored dataset
    ///
    /// # Returns
    /// `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StoreError::Deserialization` if the stored document is malformed
    async fn load(&self) -> Result<Option<T>, StoreError>;

    /// Replace the stored dataset
    ///
    /// # Errors
    /// Returns `StoreError` if the dataset cannot be written
    async fn save(&self, records: &T) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: StoreError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn deserialization_error_message() {
        let err = StoreError::Deserialization("expected value".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
