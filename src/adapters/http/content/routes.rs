//! Axum router configuration for content endpoints.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use super::handlers::{
    bulk_generate, check_content, create_calendar_entry, create_draft, delete_calendar_entry,
    delete_draft, get_stats, list_calendar, list_drafts, regenerate, update_calendar_entry,
    update_draft, update_draft_status, ContentHandlers,
};

/// Create the content API router.
///
/// # Routes
///
/// - `GET /stats` - Draft and calendar counters
/// - `GET /drafts`, `POST /drafts` - List or create drafts
/// - `PUT /drafts/:id`, `DELETE /drafts/:id` - Update or delete a draft
/// - `PATCH /drafts/:id/status` - Change a draft's status
/// - `GET /calendar`, `POST /calendar` - List or schedule entries
/// - `PUT /calendar/:id`, `DELETE /calendar/:id` - Update or remove an entry
/// - `POST /bulk-generate` - Schedule themed posts over a date range
/// - `POST /regenerate` - Rewrite content
/// - `POST /check` - Score and validate content
pub fn content_routes() -> Router<ContentHandlers> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/drafts", get(list_drafts).post(create_draft))
        .route("/drafts/:id", put(update_draft).delete(delete_draft))
        .route("/drafts/:id/status", patch(update_draft_status))
        .route("/calendar", get(list_calendar).post(create_calendar_entry))
        .route(
            "/calendar/:id",
            put(update_calendar_entry).delete(delete_calendar_entry),
        )
        .route("/bulk-generate", post(bulk_generate))
        .route("/regenerate", post(regenerate))
        .route("/check", post(check_content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::storage::InMemoryStore;
    use crate::application::{CalendarHandler, Dataset, DraftHandler};
    use crate::domain::library::ContentLibrary;
    use crate::ports::RecordStore;

    fn test_router() -> Router {
        let store: Arc<dyn RecordStore<ContentLibrary>> =
            Arc::new(InMemoryStore::<ContentLibrary>::new());
        let dataset = Arc::new(Dataset::with_records(ContentLibrary::default(), store));
        let handlers = ContentHandlers::new(
            Arc::new(DraftHandler::new(dataset.clone())),
            Arc::new(CalendarHandler::new(dataset, 31)),
        );
        content_routes().with_state(handlers)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn stats_route_responds_ok() {
        let response = test_router()
            .oneshot(Request::get("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_draft_returns_created() {
        let response = test_router()
            .oneshot(json_request("POST", "/drafts", r#"{"content": "Hello there"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_draft_without_content_is_bad_request() {
        let response = test_router()
            .oneshot(json_request("POST", "/drafts", r#"{"title": "Empty"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = test_router()
            .oneshot(json_request("POST", "/calendar", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_draft_is_not_found() {
        let uri = format!("/drafts/{}", crate::domain::foundation::DraftId::new());
        let response = test_router()
            .oneshot(Request::delete(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_draft_id_is_bad_request() {
        let response = test_router()
            .oneshot(json_request("PATCH", "/drafts/42/status", r#"{"status": "approved"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
