//! Axum router configuration for visual endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    customize_template, delete_asset, list_assets, list_templates, register_asset, visual_stats,
    VisualHandlers,
};

/// Create the visual API router.
///
/// # Routes
///
/// - `GET /assets` - Filtered, paginated assets
/// - `POST /assets` - Register asset metadata
/// - `DELETE /assets/:id` - Remove an asset
/// - `GET /templates` - Built-in templates
/// - `POST /customize-template` - Derive an asset from a template
/// - `GET /stats` - Asset counts
pub fn visual_routes() -> Router<VisualHandlers> {
    Router::new()
        .route("/assets", get(list_assets).post(register_asset))
        .route("/assets/:id", delete(delete_asset))
        .route("/templates", get(list_templates))
        .route("/customize-template", post(customize_template))
        .route("/stats", get(visual_stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::storage::InMemoryStore;
    use crate::application::{Dataset, VisualHandler};
    use crate::domain::foundation::VisualAssetId;
    use crate::domain::visual::VisualLibrary;
    use crate::ports::RecordStore;

    fn test_router() -> Router {
        let store: Arc<dyn RecordStore<VisualLibrary>> =
            Arc::new(InMemoryStore::<VisualLibrary>::new());
        let dataset = Arc::new(Dataset::with_records(VisualLibrary::default(), store));
        visual_routes().with_state(VisualHandlers::new(Arc::new(VisualHandler::new(dataset))))
    }

    #[tokio::test]
    async fn templates_route_responds_ok() {
        let response = test_router()
            .oneshot(Request::get("/templates?type=image").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_asset_type_is_bad_request() {
        let response = test_router()
            .oneshot(Request::get("/assets?type=audio").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_unknown_asset_is_not_found() {
        let uri = format!("/assets/{}", VisualAssetId::new());
        let response = test_router()
            .oneshot(Request::delete(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn customizing_unknown_template_is_not_found() {
        let request = Request::post("/customize-template")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"templateId": 99}"#))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
