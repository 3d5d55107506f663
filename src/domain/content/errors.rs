//! Errors for the drafts, calendar and compose area.

use super::GenerationError;
use crate::domain::foundation::{CalendarEntryId, DraftId, ErrorCode, ValidationError};

/// Content-area errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Draft was not found.
    DraftNotFound(DraftId),
    /// Calendar entry was not found.
    CalendarEntryNotFound(CalendarEntryId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Unrecognized content type or platform.
    InvalidArgument(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ContentError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ContentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ContentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ContentError::DraftNotFound(_) => ErrorCode::DraftNotFound,
            ContentError::CalendarEntryNotFound(_) => ErrorCode::CalendarEntryNotFound,
            ContentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ContentError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            ContentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ContentError::DraftNotFound(id) => format!("Draft not found: {}", id),
            ContentError::CalendarEntryNotFound(id) => {
                format!("Calendar entry not found: {}", id)
            }
            ContentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ContentError::InvalidArgument(msg) => msg.clone(),
            ContentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ContentError {}

impl From<ValidationError> for ContentError {
    fn from(err: ValidationError) -> Self {
        ContentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<GenerationError> for ContentError {
    fn from(err: GenerationError) -> Self {
        ContentError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_are_distinct() {
        assert_eq!(
            ContentError::DraftNotFound(DraftId::new()).code(),
            ErrorCode::DraftNotFound
        );
        assert_eq!(
            ContentError::CalendarEntryNotFound(CalendarEntryId::new()).code(),
            ErrorCode::CalendarEntryNotFound
        );
    }

    #[test]
    fn draft_not_found_message_includes_id() {
        let id = DraftId::new();
        assert!(ContentError::DraftNotFound(id)
            .message()
            .contains(&id.to_string()));
    }

    #[test]
    fn validation_error_keeps_field() {
        let err: ContentError = ValidationError::empty_field("content").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.message().contains("content"));
    }
}
