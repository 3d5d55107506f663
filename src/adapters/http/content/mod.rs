//! HTTP adapter for content endpoints.
//!
//! Exposes drafts, the publishing calendar and the compose helpers under
//! `/api/content`.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ContentHandlers;
pub use routes::content_routes;
