//! Strategy-specific error types.

use crate::domain::content::GenerationError;
use crate::domain::foundation::{ErrorCode, StrategyId, ValidationError};

/// Strategy-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Strategy was not found.
    NotFound(StrategyId),
    /// Strategy exists but has not been analyzed.
    AnalysisNotFound(StrategyId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Unrecognized content type or platform.
    InvalidArgument(String),
    /// The analyzer could not produce an analysis.
    Analyzer(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl StrategyError {
    pub fn not_found(id: StrategyId) -> Self {
        StrategyError::NotFound(id)
    }
    pub fn analysis_not_found(id: StrategyId) -> Self {
        StrategyError::AnalysisNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StrategyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        StrategyError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            StrategyError::NotFound(_) => ErrorCode::StrategyNotFound,
            StrategyError::AnalysisNotFound(_) => ErrorCode::AnalysisNotFound,
            StrategyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            StrategyError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            StrategyError::Analyzer(_) => ErrorCode::AnalyzerError,
            StrategyError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            StrategyError::NotFound(id) => format!("Strategy not found: {}", id),
            StrategyError::AnalysisNotFound(id) => {
                format!("Strategy analysis not found: {}", id)
            }
            StrategyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            StrategyError::InvalidArgument(msg) => msg.clone(),
            StrategyError::Analyzer(msg) => format!("Analysis failed: {}", msg),
            StrategyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for StrategyError {}

impl From<ValidationError> for StrategyError {
    fn from(err: ValidationError) -> Self {
        StrategyError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<GenerationError> for StrategyError {
    fn from(err: GenerationError) -> Self {
        StrategyError::InvalidArgument(err.to_string())
    }
}
