//! Configuration errors.

use thiserror::Error;

/// The environment could not be read into [`super::AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// A loaded value is outside what the service accepts.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Each dataset must use its own file")]
    SharedDataFile,

    #[error("max_items_per_pair must be between 1 and 50")]
    InvalidItemsPerPair,

    #[error("max_bulk_days must be between 1 and 366")]
    InvalidBulkDays,
}
