//! The persisted visual library: assets, templates and their queries.

use serde::{Deserialize, Serialize};

use super::asset::{CUSTOMIZED, GENERATED, UPLOADED};
use super::{builtin_templates, AssetKind, TemplateFilter, VisualAsset, VisualTemplate};
use crate::domain::foundation::{ValidationError, VisualAssetId};

pub const DEFAULT_ASSET_PAGE: usize = 1;
pub const DEFAULT_ASSET_LIMIT: usize = 20;

/// Everything the visual area persists, stored as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualLibrary {
    #[serde(default)]
    pub assets: Vec<VisualAsset>,
    #[serde(default = "builtin_templates")]
    pub templates: Vec<VisualTemplate>,
}

impl Default for VisualLibrary {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            templates: builtin_templates(),
        }
    }
}

impl VisualLibrary {
    pub fn find_template(&self, id: u32) -> Option<&VisualTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn remove_asset(&mut self, id: VisualAssetId) -> Option<VisualAsset> {
        let index = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(index))
    }

    pub fn list_templates(&self, filter: &TemplateFilter) -> Vec<VisualTemplate> {
        self.templates
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> VisualStats {
        let count_kind = |kind| self.assets.iter().filter(|a| a.kind == kind).count();
        let count_category = |category: &str| {
            self.assets
                .iter()
                .filter(|a| a.category == category)
                .count()
        };

        VisualStats {
            total_assets: self.assets.len(),
            image_assets: count_kind(AssetKind::Image),
            video_assets: count_kind(AssetKind::Video),
            generated_assets: count_category(GENERATED),
            uploaded_assets: count_category(UPLOADED),
            customized_assets: count_category(CUSTOMIZED),
            total_templates: self.templates.len(),
        }
    }
}

/// Asset list query. `None` filters match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetQuery {
    pub kind: Option<AssetKind>,
    pub category: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self {
            kind: None,
            category: None,
            page: DEFAULT_ASSET_PAGE,
            limit: DEFAULT_ASSET_LIMIT,
        }
    }
}

impl AssetQuery {
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

    fn matches(&self, asset: &VisualAsset) -> bool {
        self.kind.map_or(true, |kind| asset.kind == kind)
            && self
                .category
                .as_deref()
                .map_or(true, |category| asset.category == category)
    }
}

/// One page of assets plus totals for the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPage {
    pub assets: Vec<VisualAsset>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Filters, sorts newest first and paginates. Pages past the end are empty.
pub fn list_assets(assets: &[VisualAsset], query: &AssetQuery) -> AssetPage {
    let mut matching: Vec<&VisualAsset> = assets.iter().filter(|a| query.matches(a)).collect();
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = matching.len();
    let limit = query.limit.max(1);
    let start = query.page.max(1).saturating_sub(1).saturating_mul(limit);

    AssetPage {
        assets: matching
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

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStats {
    pub total_assets: usize,
    pub image_assets: usize,
    pub video_assets: usize,
    pub generated_assets: usize,
    pub uploaded_assets: usize,
    pub customized_assets: usize,
    pub total_templates: usize,
}
