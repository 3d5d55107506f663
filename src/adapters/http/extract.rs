//! Request extractors whose rejections use the API error shape.

use std::str::FromStr;

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor. Malformed bodies become 400 `ErrorResponse`s.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Query string extractor with the same rejection handling.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Parses a path id, rejecting malformed ids with 400.
pub fn parse_id<T: FromStr>(kind: &str, raw: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID: {}", kind, raw)))
}

/// Parses an optional string field. Absent and blank values are `None`.
pub fn parse_optional<T, E>(value: Option<String>) -> Result<Option<T>, E>
where
    T: FromStr,
    T::Err: Into<E>,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentError, Platform};
    use crate::domain::foundation::DraftId;

    #[test]
    fn parse_optional_treats_blank_as_absent() {
        let parsed: Result<Option<Platform>, ContentError> = parse_optional(Some("  ".into()));
        assert_eq!(parsed, Ok(None));

        let parsed: Result<Option<Platform>, ContentError> = parse_optional(None);
        assert_eq!(parsed, Ok(None));
    }

    #[test]
    fn parse_optional_parses_known_values() {
        let parsed: Result<Option<Platform>, ContentError> =
            parse_optional(Some("linkedin".into()));
        assert_eq!(parsed, Ok(Some(Platform::Linkedin)));
    }

    #[test]
    fn parse_optional_reports_unknown_values_as_invalid_argument() {
        let parsed: Result<Option<Platform>, ContentError> = parse_optional(Some("myspace".into()));
        assert!(matches!(parsed, Err(ContentError::InvalidArgument(_))));
    }

    #[test]
    fn parse_id_rejects_malformed_ids() {
        let err = parse_id::<DraftId>("draft", "not-a-uuid").unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);

        let id = DraftId::new();
        assert_eq!(parse_id::<DraftId>("draft", &id.to_string()).unwrap(), id);
    }
}
