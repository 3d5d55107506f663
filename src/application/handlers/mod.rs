//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! persisted datasets.

mod calendar;
mod compose;
mod drafts;
mod generate_content;
mod strategy;
mod visual;

pub use calendar::{BulkGenerateResult, CalendarHandler};
pub use compose::{ComposeHandler, ContentCheck};
pub use drafts::DraftHandler;
pub use generate_content::{GenerateContentCommand, GenerateContentHandler};
pub use strategy::StrategyHandler;
pub use visual::VisualHandler;
