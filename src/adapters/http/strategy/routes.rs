//! Axum router configuration for strategy endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    analyze_strategy, delete_strategy, generate_content, get_analysis, get_generated_content,
    list_strategies, register_strategy, StrategyHandlers,
};

/// Create the strategy API router.
///
/// # Routes
///
/// - `GET /list` - Registered strategies
/// - `POST /register` - Register document metadata
/// - `POST /analyze/:id` - Run the analyzer
/// - `GET /analysis/:id` - Stored analysis
/// - `POST /generate-content` - Generate content from an analysis
/// - `GET /generated-content/:strategyId` - Generated content for a strategy
/// - `DELETE /:id` - Remove a strategy
pub fn strategy_routes() -> Router<StrategyHandlers> {
    Router::new()
        .route("/list", get(list_strategies))
        .route("/register", post(register_strategy))
        .route("/analyze/:id", post(analyze_strategy))
        .route("/analysis/:id", get(get_analysis))
        .route("/generate-content", post(generate_content))
        .route("/generated-content/:strategy_id", get(get_generated_content))
        .route("/:id", delete(delete_strategy))
}
