//! Storage Adapters
//!
//! Implementations of the RecordStore port.
//!
//! ## Available Adapters
//!
//! - **JsonFileStore** - Stores a dataset as a JSON file on disk
//! - **InMemoryStore** - Stores a dataset in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryStore, JsonFileStore};
//!
//! // Production: file-based storage
//! let store = JsonFileStore::<ContentLibrary>::new("./data/content.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryStore::<ContentLibrary>::new();
//! ```

mod in_memory_store;
mod json_file_store;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
