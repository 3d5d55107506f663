//! Filtering, sorting and pagination of the draft list.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use super::{Draft, DraftStatus};
use crate::domain::foundation::ValidationError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 50;

/// Sort order for the draft list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftSort {
    #[default]
    CreatedDesc,
    CreatedAsc,
    QualityDesc,
    TitleAsc,
}

impl FromStr for DraftSort {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_desc" => Ok(DraftSort::CreatedDesc),
            "created_asc" => Ok(DraftSort::CreatedAsc),
            "quality_desc" => Ok(DraftSort::QualityDesc),
            "title_asc" => Ok(DraftSort::TitleAsc),
            other => Err(ValidationError::invalid_format(
                "sort",
                format!("unknown sort order '{}'", other),
            )),
        }
    }
}

impl DraftSort {
    fn compare(&self, a: &Draft, b: &Draft) -> Ordering {
        match self {
            DraftSort::CreatedDesc => b.created_at.cmp(&a.created_at),
            DraftSort::CreatedAsc => a.created_at.cmp(&b.created_at),
            DraftSort::QualityDesc => b.quality_score.cmp(&a.quality_score),
            DraftSort::TitleAsc => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
        }
    }
}

/// Draft list query. `status: None` means every status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftQuery {
    pub status: Option<DraftStatus>,
    pub search: Option<String>,
    pub sort: DraftSort,
    pub page: usize,
    pub limit: usize,
}

impl Default for DraftQuery {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            sort: DraftSort::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl DraftQuery {
    /// # Errors
    ///
    /// - `OutOfRange` if page or limit is zero
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page == 0 {
            return Err(ValidationError::out_of_range("page", 1, i32::MAX, 0));
        }
        if self.limit == 0 {
            return Err(ValidationError::out_of_range("limit", 1, i32::MAX, 0));
        }
        Ok(())
    }

    fn matches(&self, draft: &Draft) -> bool {
        if let Some(status) = self.status {
            if draft.status != status {
                return false;
            }
        }
        match self.search.as_deref().map(str::to_lowercase) {
            Some(needle) if !needle.is_empty() => {
                draft.title.to_lowercase().contains(&needle)
                    || draft.content.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

/// One page of drafts plus totals for the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPage {
    pub drafts: Vec<Draft>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Applies filter, sort and pagination. Pages past the end are empty.
pub fn list_drafts(drafts: &[Draft], query: &DraftQuery) -> DraftPage {
    let mut matching: Vec<&Draft> = drafts.iter().filter(|d| query.matches(d)).collect();
    matching.sort_by(|a, b| query.sort.compare(a, b));

    let total = matching.len();
    let limit = query.limit.max(1);
    let start = query.page.max(1).saturating_sub(1).saturating_mul(limit);

    DraftPage {
        drafts: matching
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect(),
        total,
        page: query.page,
        limit: query.limit,
        total_pages: total.div_ceil(limit),
    }
}
