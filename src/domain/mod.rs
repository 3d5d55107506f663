//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `content` - Scoring, template generation and content checks
//! - `drafts` - Draft entity and list queries
//! - `calendar` - Scheduled entries and bulk scheduling
//! - `library` - Drafts and calendar persisted as one document
//! - `strategy` - Strategy registry, analyses and generated content
//! - `visual` - Image and video asset catalog with templates

pub mod calendar;
pub mod content;
pub mod drafts;
pub mod foundation;
pub mod library;
pub mod strategy;
pub mod visual;
