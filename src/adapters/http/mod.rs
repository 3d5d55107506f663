//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter (`content`, `strategy`, `visual`) with DTOs, handlers
//! and routes. This module assembles them into the application router and
//! applies the shared middleware stack.

pub mod content;
pub mod error;
pub mod extract;
pub mod strategy;
pub mod visual;

use std::sync::Arc;

use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::{
    CalendarHandler, Dataset, DraftHandler, GenerateContentHandler, StrategyHandler,
    VisualHandler,
};
use crate::config::{GenerationConfig, ServerConfig};
use crate::domain::foundation::Timestamp;
use crate::domain::library::ContentLibrary;
use crate::domain::strategy::StrategyData;
use crate::domain::visual::VisualLibrary;
use crate::ports::StrategyAnalyzer;

pub use content::{content_routes, ContentHandlers};
pub use error::{ApiError, ErrorResponse};
pub use strategy::{strategy_routes, StrategyHandlers};
pub use visual::{visual_routes, VisualHandlers};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "content-studio";

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Handler state for every API area.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentHandlers,
    pub strategy: StrategyHandlers,
    pub visual: VisualHandlers,
}

impl AppState {
    /// Wires the application handlers over the three datasets.
    pub fn new(
        content: Arc<Dataset<ContentLibrary>>,
        strategies: Arc<Dataset<StrategyData>>,
        visuals: Arc<Dataset<VisualLibrary>>,
        analyzer: Arc<dyn StrategyAnalyzer>,
        generation: &GenerationConfig,
    ) -> Self {
        let drafts = Arc::new(DraftHandler::new(content.clone()));
        let calendar = Arc::new(CalendarHandler::new(content, generation.max_bulk_days));
        let registry = Arc::new(StrategyHandler::new(strategies.clone(), analyzer));
        let generator = Arc::new(GenerateContentHandler::new(
            strategies,
            generation.max_items_per_pair,
        ));

        Self {
            content: ContentHandlers::new(drafts, calendar),
            strategy: StrategyHandlers::new(registry, generator),
            visual: VisualHandlers::new(Arc::new(VisualHandler::new(visuals))),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Shared DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Confirmation body for delete operations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub version: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteNotFound {
    pub code: &'static str,
    pub message: &'static str,
    pub path: String,
    pub method: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Router
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Timestamp::now(),
        version: env!("CARGO_PKG_VERSION"),
        service: SERVICE_NAME,
    })
}

/// Fallback for unknown routes.
pub async fn route_not_found(method: Method, uri: Uri) -> impl IntoResponse {
    let body = RouteNotFound {
        code: "NOT_FOUND",
        message: "Route not found",
        path: uri.path().to_string(),
        method: method.to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

/// Routes without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/content", content_routes().with_state(state.content))
        .nest("/api/strategy", strategy_routes().with_state(state.strategy))
        .nest("/api/visual", visual_routes().with_state(state.visual))
        .fallback(route_not_found)
}

/// The full application: routes plus tracing, CORS, timeout, compression
/// and request id middleware.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Configured origins, or permissive when none are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
