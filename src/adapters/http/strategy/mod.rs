//! HTTP adapter for strategy endpoints.
//!
//! Exposes the strategy registry, analysis and content generation under
//! `/api/strategy`.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::StrategyHandlers;
pub use routes::strategy_routes;
