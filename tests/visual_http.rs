//! Integration tests for visual HTTP endpoints.
//!
//! Asset catalog, templates and stats through the full router.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use content_studio::adapters::http::{app, AppState};
use content_studio::adapters::{JsonFileStore, SampleStrategyAnalyzer};
use content_studio::application::Dataset;
use content_studio::config::{GenerationConfig, ServerConfig};
use content_studio::domain::library::ContentLibrary;
use content_studio::domain::strategy::StrategyData;
use content_studio::domain::visual::VisualLibrary;
use content_studio::ports::RecordStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn test_app(dir: &Path) -> Router {
    let content_store: Arc<dyn RecordStore<ContentLibrary>> =
        Arc::new(JsonFileStore::<ContentLibrary>::new(dir.join("content.json")));
    let strategy_store: Arc<dyn RecordStore<StrategyData>> =
        Arc::new(JsonFileStore::<StrategyData>::new(dir.join("strategies.json")));
    let visual_store: Arc<dyn RecordStore<VisualLibrary>> =
        Arc::new(JsonFileStore::<VisualLibrary>::new(dir.join("visual.json")));

    let state = AppState::new(
        Arc::new(Dataset::load(content_store).await.unwrap()),
        Arc::new(Dataset::load(strategy_store).await.unwrap()),
        Arc::new(Dataset::load(visual_store).await.unwrap()),
        Arc::new(SampleStrategyAnalyzer::new()),
        &GenerationConfig::default(),
    );
    app(state, &ServerConfig::default())
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(router: &Router, body: Value) -> Value {
    let (status, body) = send(router, "POST", "/api/visual/assets", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Visual asset registered successfully");
    body["asset"].clone()
}

// =============================================================================
// Templates
// =============================================================================

#[tokio::test]
async fn templates_are_listed_and_filtered() {
    let dir = TempDir::new().unwrap();
    let router = test_app(dir.path()).await;

    let (status, all) = send(&router, "GET", "/api/visual/templates", None).await;
    assert_eq!(status, StatusCode::OK);
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0]["name"], "Social Media Post");
    assert_eq!(all[0]["size"], "1080x1080");

    let (_, videos) = send(&router, "GET", "/api/visual/templates?type=video", None).await;
    assert_eq!(videos.as_array().unwrap().len(), 1);
    assert_eq!(videos[0]["name"], "Product Showcase");
    assert_eq!(videos[0]["duration"], 15);

    let (_, social) = send(
        &router,
        "GET",
        "/api/visual/templates?type=all&category=social",
        None,
    )
    .await;
    assert_eq!(social.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn customizing_a_template_adds_an_asset() {
    let dir = TempDir::new().unwrap();
    let router = test_app(dir.path()).await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/visual/customize-template",
        Some(json!({ "templateId": 3, "customization": { "headline": "Spring sale" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Template customized successfully");
    assert_eq!(body["asset"]["type"], "image");
    assert_eq!(body["asset"]["category"], "customized");
    assert_eq!(body["asset"]["templateId"], 3);
    assert_eq!(body["asset"]["templateName"], "Blog Header");

    let (status, body) = send(
        &router,
        "POST",
        "/api/visual/customize-template",
        Some(json!({ "templateId": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TEMPLATE_NOT_FOUND");

    let (status, _) = send(&router, "POST", "/api/visual/customize-template", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Assets
// =============================================================================

#[tokio::test]
async fn assets_are_filtered_and_paginated() {
    let dir = TempDir::new().unwrap();
    let router = test_app(dir.path()).await;

    register(
        &router,
        json!({ "originalName": "logo.png", "fileSize": 1024, "mimeType": "image/png" }),
    )
    .await;
    register(
        &router,
        json!({ "originalName": "teaser.mp4", "fileSize": 4096, "mimeType": "video/mp4" }),
    )
    .await;
    let newest = register(
        &router,
        json!({ "originalName": "banner.jpg", "fileSize": 2048, "category": "campaign" }),
    )
    .await;
    assert_eq!(newest["type"], "image");

    let (status, page) = send(&router, "GET", "/api/visual/assets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 3);
    assert_eq!(page["page"], 1);
    assert_eq!(page["limit"], 20);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["assets"][0]["id"], newest["id"]);

    let (_, videos) = send(&router, "GET", "/api/visual/assets?type=video", None).await;
    assert_eq!(videos["total"], 1);
    assert_eq!(videos["assets"][0]["name"], "teaser.mp4");

    let (_, uploaded) = send(
        &router,
        "GET",
        "/api/visual/assets?type=all&category=uploaded",
        None,
    )
    .await;
    assert_eq!(uploaded["total"], 2);

    let (_, second) = send(&router, "GET", "/api/visual/assets?page=2&limit=2", None).await;
    assert_eq!(second["assets"].as_array().unwrap().len(), 1);
    assert_eq!(second["totalPages"], 2);

    let (status, _) = send(&router, "GET", "/api/visual/assets?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn registration_rejects_unsupported_files() {
    let dir = TempDir::new().unwrap();
    let router = test_app(dir.path()).await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/visual/assets",
        Some(json!({ "originalName": "brief.pdf", "fileSize": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, _) = send(
        &router,
        "POST",
        "/api/visual/assets",
        Some(json!({ "originalName": "huge.mov", "fileSize": 60 * 1024 * 1024 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stats_and_deletion() {
    let dir = TempDir::new().unwrap();
    let router = test_app(dir.path()).await;

    let logo = register(&router, json!({ "originalName": "logo.png", "fileSize": 10 })).await;
    register(&router, json!({ "originalName": "clip.mov", "fileSize": 10 })).await;
    send(
        &router,
        "POST",
        "/api/visual/customize-template",
        Some(json!({ "templateId": "4" })),
    )
    .await;

    let (status, stats) = send(&router, "GET", "/api/visual/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "totalAssets": 3,
            "imageAssets": 1,
            "videoAssets": 2,
            "generatedAssets": 0,
            "uploadedAssets": 2,
            "customizedAssets": 1,
            "totalTemplates": 4
        })
    );

    let id = logo["id"].as_str().unwrap();
    let (status, body) = send(&router, "DELETE", &format!("/api/visual/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Visual asset deleted successfully");

    let (status, body) = send(&router, "DELETE", &format!("/api/visual/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ASSET_NOT_FOUND");

    let (status, _) = send(&router, "DELETE", "/api/visual/assets/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stats) = send(&router, "GET", "/api/visual/stats", None).await;
    assert_eq!(stats["totalAssets"], 2);
}

#[tokio::test]
async fn assets_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let id = {
        let router = test_app(dir.path()).await;
        let asset = register(&router, json!({ "originalName": "logo.gif", "fileSize": 10 })).await;
        asset["id"].as_str().unwrap().to_string()
    };

    let router = test_app(dir.path()).await;
    let (_, page) = send(&router, "GET", "/api/visual/assets", None).await;
    assert_eq!(page["assets"][0]["id"], id.as_str());
    let (_, templates) = send(&router, "GET", "/api/visual/templates", None).await;
    assert_eq!(templates.as_array().unwrap().len(), 4);
}
