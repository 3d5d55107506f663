//! Visual catalog errors.

use crate::domain::foundation::{ErrorCode, ValidationError, VisualAssetId};

/// Visual-area errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualError {
    AssetNotFound(VisualAssetId),
    TemplateNotFound(u32),
    ValidationFailed { field: String, message: String },
    Infrastructure(String),
}

impl VisualError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        VisualError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            VisualError::AssetNotFound(_) => ErrorCode::AssetNotFound,
            VisualError::TemplateNotFound(_) => ErrorCode::TemplateNotFound,
            VisualError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            VisualError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            VisualError::AssetNotFound(id) => format!("Visual asset not found: {}", id),
            VisualError::TemplateNotFound(id) => format!("Template not found: {}", id),
            VisualError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            VisualError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for VisualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for VisualError {}

impl From<ValidationError> for VisualError {
    fn from(err: ValidationError) -> Self {
        VisualError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
