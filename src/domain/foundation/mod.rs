//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the content studio domain.

mod errors;
mod ids;
mod quality_score;
mod star_rating;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{CalendarEntryId, DraftId, GeneratedContentId, StrategyId, VisualAssetId};
pub use quality_score::QualityScore;
pub use star_rating::StarRating;
pub use timestamp::Timestamp;
