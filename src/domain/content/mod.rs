//! Content module - scoring, template generation and content checks.
//!
//! Everything here is pure and synchronous.

mod errors;
pub mod generator;
pub mod keywords;
pub mod platform;
pub mod regenerate;
pub mod scorer;
pub mod templates;
mod types;

pub use errors::ContentError;
pub use generator::{assemble_hashtags, generate, generate_batch};
pub use keywords::{extract_keywords, DEFAULT_KEYWORD_COUNT};
pub use platform::{
    character_limit, optimal_posting_times, optimize_for_platform, validate_content,
    ContentValidation,
};
pub use regenerate::{regenerate, RegeneratedContent, RegenerationVariant};
pub use scorer::score;
pub use types::{ContentRecord, ContentType, GenerationError, Platform};
