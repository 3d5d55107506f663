//! Drafts module - editable content and the draft list query.

mod draft;
mod query;

pub use draft::{Draft, DraftStatus, DraftUpdate, NewDraft};
pub use query::{list_drafts, DraftPage, DraftQuery, DraftSort, DEFAULT_LIMIT, DEFAULT_PAGE};
