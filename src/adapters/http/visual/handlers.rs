//! HTTP handlers for visual endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{parse_id, ApiJson, ApiQuery};
use crate::adapters::http::MessageResponse;
use crate::application::VisualHandler;
use crate::domain::foundation::VisualAssetId;
use crate::domain::visual::{AssetQuery, NewVisualAsset, TemplateFilter};

use super::dto::{
    AssetResponse, CustomizeTemplateRequest, ListAssetsParams, ListTemplatesParams,
    RegisterAssetRequest,
};

#[derive(Clone)]
pub struct VisualHandlers {
    visuals: Arc<VisualHandler>,
}

impl VisualHandlers {
    pub fn new(visuals: Arc<VisualHandler>) -> Self {
        Self { visuals }
    }
}

/// GET /api/visual/assets - Filtered, paginated assets, newest first
pub async fn list_assets(
    State(handlers): State<VisualHandlers>,
    ApiQuery(params): ApiQuery<ListAssetsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = AssetQuery::try_from(params)?;
    Ok(Json(handlers.visuals.list_assets(query).await?))
}

/// POST /api/visual/assets - Register asset metadata
pub async fn register_asset(
    State(handlers): State<VisualHandlers>,
    ApiJson(req): ApiJson<RegisterAssetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let asset = handlers.visuals.register(NewVisualAsset::from(req)).await?;
    let response = AssetResponse {
        message: "Visual asset registered successfully".to_string(),
        asset,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/visual/assets/:id
pub async fn delete_asset(
    State(handlers): State<VisualHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: VisualAssetId = parse_id("asset", &id)?;
    handlers.visuals.delete(id).await?;
    Ok(Json(MessageResponse::new("Visual asset deleted successfully")))
}

/// GET /api/visual/templates
pub async fn list_templates(
    State(handlers): State<VisualHandlers>,
    ApiQuery(params): ApiQuery<ListTemplatesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = TemplateFilter::try_from(params)?;
    Ok(Json(handlers.visuals.list_templates(filter).await))
}

/// POST /api/visual/customize-template - Derive an asset from a template
pub async fn customize_template(
    State(handlers): State<VisualHandlers>,
    ApiJson(req): ApiJson<CustomizeTemplateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let template_id = req.template_id()?;
    let asset = handlers
        .visuals
        .customize_template(template_id, req.customization)
        .await?;
    Ok(Json(AssetResponse {
        message: "Template customized successfully".to_string(),
        asset,
    }))
}

/// GET /api/visual/stats - Asset counts
pub async fn visual_stats(State(handlers): State<VisualHandlers>) -> impl IntoResponse {
    Json(handlers.visuals.stats().await)
}
