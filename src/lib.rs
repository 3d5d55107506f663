//! Content Studio - content marketing back office
//!
//! Drafts, a publishing calendar, strategy document analysis and
//! template-based platform content generation with quality scoring.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
