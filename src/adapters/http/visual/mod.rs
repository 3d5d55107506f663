//! HTTP adapter for visual endpoints under `/api/visual`.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::VisualHandlers;
pub use routes::visual_routes;
