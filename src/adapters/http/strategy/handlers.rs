//! HTTP handlers for strategy endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{parse_id, ApiJson};
use crate::adapters::http::MessageResponse;
use crate::application::{GenerateContentCommand, GenerateContentHandler, StrategyHandler};
use crate::domain::foundation::StrategyId;
use crate::domain::strategy::NewStrategy;

use super::dto::{GenerateContentRequest, RegisterStrategyRequest, RegisterStrategyResponse};

#[derive(Clone)]
pub struct StrategyHandlers {
    strategies: Arc<StrategyHandler>,
    generator: Arc<GenerateContentHandler>,
}

impl StrategyHandlers {
    pub fn new(strategies: Arc<StrategyHandler>, generator: Arc<GenerateContentHandler>) -> Self {
        Self {
            strategies,
            generator,
        }
    }
}

/// GET /api/strategy/list - Every registered strategy
pub async fn list_strategies(State(handlers): State<StrategyHandlers>) -> impl IntoResponse {
    Json(handlers.strategies.list().await)
}

/// POST /api/strategy/register - Register strategy document metadata
pub async fn register_strategy(
    State(handlers): State<StrategyHandlers>,
    ApiJson(req): ApiJson<RegisterStrategyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let strategy = handlers.strategies.register(NewStrategy::from(req)).await?;
    let response = RegisterStrategyResponse {
        message: "Strategy registered successfully".to_string(),
        strategy,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/strategy/analyze/:id - Analyze a registered strategy
pub async fn analyze_strategy(
    State(handlers): State<StrategyHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: StrategyId = parse_id("strategy", &id)?;
    let analysis = handlers.strategies.analyze(id).await?;
    Ok(Json(analysis))
}

/// GET /api/strategy/analysis/:id - Stored analysis for a strategy
pub async fn get_analysis(
    State(handlers): State<StrategyHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: StrategyId = parse_id("strategy", &id)?;
    let analysis = handlers.strategies.analysis(id).await?;
    Ok(Json(analysis))
}

/// POST /api/strategy/generate-content - Generate content from an analysis
pub async fn generate_content(
    State(handlers): State<StrategyHandlers>,
    ApiJson(req): ApiJson<GenerateContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = GenerateContentCommand::try_from(req)?;
    let generated = handlers.generator.handle(cmd).await?;
    Ok(Json(generated))
}

/// GET /api/strategy/generated-content/:strategyId - Content generated so far
pub async fn get_generated_content(
    State(handlers): State<StrategyHandlers>,
    Path(strategy_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let strategy_id: StrategyId = parse_id("strategy", &strategy_id)?;
    Ok(Json(handlers.generator.generated(strategy_id).await))
}

/// DELETE /api/strategy/:id - Remove a strategy and everything derived from it
pub async fn delete_strategy(
    State(handlers): State<StrategyHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: StrategyId = parse_id("strategy", &id)?;
    handlers.strategies.delete(id).await?;
    Ok(Json(MessageResponse::new("Strategy deleted successfully")))
}
