//! Error responses shared by every HTTP adapter.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::content::ContentError;
use crate::domain::foundation::ErrorCode;
use crate::domain::strategy::StrategyError;
use crate::domain::visual::VisualError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Maps a domain error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorCode::DraftNotFound
        | ErrorCode::CalendarEntryNotFound
        | ErrorCode::StrategyNotFound
        | ErrorCode::AnalysisNotFound
        | ErrorCode::AssetNotFound
        | ErrorCode::TemplateNotFound => StatusCode::NOT_FOUND,
        ErrorCode::StorageError | ErrorCode::AnalyzerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// API error type that converts domain and extractor errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::bad_request(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn from_code(code: ErrorCode, message: String, field: Option<&str>) -> Self {
        let status = status_for(code);
        if status.is_server_error() {
            tracing::error!(code = %code, error = %message, "Request failed");
        }

        let mut body = ErrorResponse::new(code.to_string(), message);
        if let Some(field) = field {
            body = body.with_details(serde_json::json!({ "field": field }));
        }
        Self { status, body }
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        let field = match &err {
            ContentError::ValidationFailed { field, .. } => Some(field.as_str()),
            _ => None,
        };
        Self::from_code(err.code(), err.message(), field)
    }
}

impl From<StrategyError> for ApiError {
    fn from(err: StrategyError) -> Self {
        let field = match &err {
            StrategyError::ValidationFailed { field, .. } => Some(field.as_str()),
            _ => None,
        };
        Self::from_code(err.code(), err.message(), field)
    }
}

impl From<VisualError> for ApiError {
    fn from(err: VisualError) -> Self {
        let field = match &err {
            VisualError::ValidationFailed { field, .. } => Some(field.as_str()),
            _ => None,
        };
        Self::from_code(err.code(), err.message(), field)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
