//! HTTP DTOs for visual endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapters::http::extract::parse_optional;
use crate::domain::visual::{
    AssetKind, AssetQuery, NewVisualAsset, TemplateFilter, VisualAsset, VisualError,
    DEFAULT_ASSET_LIMIT, DEFAULT_ASSET_PAGE,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for listing assets. `all` matches every value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAssetsParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl TryFrom<ListAssetsParams> for AssetQuery {
    type Error = VisualError;

    fn try_from(params: ListAssetsParams) -> Result<Self, Self::Error> {
        Ok(AssetQuery {
            kind: parse_kind(params.kind)?,
            category: category_filter(params.category),
            page: params.page.unwrap_or(DEFAULT_ASSET_PAGE),
            limit: params.limit.unwrap_or(DEFAULT_ASSET_LIMIT),
        })
    }
}

/// Query parameters for listing templates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTemplatesParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
}

impl TryFrom<ListTemplatesParams> for TemplateFilter {
    type Error = VisualError;

    fn try_from(params: ListTemplatesParams) -> Result<Self, Self::Error> {
        Ok(TemplateFilter {
            kind: parse_kind(params.kind)?,
            category: category_filter(params.category),
        })
    }
}

fn parse_kind(raw: Option<String>) -> Result<Option<AssetKind>, VisualError> {
    match raw.as_deref().map(str::trim) {
        Some("all") => Ok(None),
        _ => parse_optional::<AssetKind, VisualError>(raw),
    }
}

fn category_filter(raw: Option<String>) -> Option<String> {
    raw.map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && c != "all")
}

/// Metadata for an image or video stored elsewhere.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAssetRequest {
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub file_size: u64,
    pub mime_type: Option<String>,
    pub file_path: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl From<RegisterAssetRequest> for NewVisualAsset {
    fn from(req: RegisterAssetRequest) -> Self {
        NewVisualAsset {
            original_name: req.original_name,
            file_size: req.file_size,
            mime_type: req.mime_type,
            file_path: req.file_path.filter(|p| !p.trim().is_empty()),
            category: req.category,
            description: req.description,
        }
    }
}

/// Request to derive an asset from a template. `templateId` may be a
/// number or a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeTemplateRequest {
    pub template_id: Option<Value>,
    pub customization: Option<Value>,
}

impl CustomizeTemplateRequest {
    pub fn template_id(&self) -> Result<u32, VisualError> {
        let id = match &self.template_id {
            Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        id.ok_or_else(|| VisualError::ValidationFailed {
            field: "templateId".to_string(),
            message: "Template ID is required".to_string(),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response carrying a newly catalogued asset.
#[derive(Debug, Clone, Serialize)]
pub struct AssetResponse {
    pub message: String,
    pub asset: VisualAsset,
}
