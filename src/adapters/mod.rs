//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `analysis` - Strategy analyzer implementations
//! - `http` - REST API (axum)
//! - `storage` - Dataset persistence (JSON file, in-memory)

pub mod analysis;
pub mod http;
pub mod storage;

pub use analysis::SampleStrategyAnalyzer;
pub use storage::{InMemoryStore, JsonFileStore};
