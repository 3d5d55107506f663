//! Strategy module - registered strategy documents, their analyses and
//! the content generated from them.

mod analysis;
mod errors;
mod generated;
mod registry;

pub use analysis::{ContentPillar, Recommendation, StrategyAnalysis};
pub use errors::StrategyError;
pub use generated::{GeneratedContent, StrategyData};
pub use registry::{NewStrategy, Strategy, StrategyStatus, ALLOWED_EXTENSIONS, MAX_FILE_SIZE};
