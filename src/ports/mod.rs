//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordStore` - Whole-dataset persistence
//! - `StrategyAnalyzer` - Strategy document analysis

mod record_store;
mod strategy_analyzer;

pub use record_store::{RecordStore, StoreError};
pub use strategy_analyzer::{AnalyzerError, StrategyAnalyzer};
