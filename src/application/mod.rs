//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod dataset;
pub mod handlers;

pub use dataset::Dataset;
pub use handlers::{
    BulkGenerateResult, CalendarHandler, ComposeHandler, ContentCheck, DraftHandler,
    GenerateContentCommand, GenerateContentHandler, StrategyHandler, VisualHandler,
};
