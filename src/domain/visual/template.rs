//! Built-in visual templates.

use serde::{Deserialize, Serialize};

use super::AssetKind;

/// A reusable layout that can be customized into an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTemplate {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Pixel dimensions as `WIDTHxHEIGHT`, for images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Length in seconds, for videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub category: String,
    pub description: String,
}

fn image(id: u32, name: &str, size: &str, category: &str, description: &str) -> VisualTemplate {
    VisualTemplate {
        id,
        name: name.to_string(),
        kind: AssetKind::Image,
        size: Some(size.to_string()),
        duration: None,
        category: category.to_string(),
        description: description.to_string(),
    }
}

/// The templates every catalog starts with.
pub fn builtin_templates() -> Vec<VisualTemplate> {
    vec![
        image(
            1,
            "Social Media Post",
            "1080x1080",
            "social",
            "Perfect square format for Instagram and Facebook posts",
        ),
        image(
            2,
            "Instagram Story",
            "1080x1920",
            "social",
            "Vertical format optimized for Instagram and Facebook stories",
        ),
        image(
            3,
            "Blog Header",
            "1200x600",
            "blog",
            "Wide format perfect for blog headers and website banners",
        ),
        VisualTemplate {
            id: 4,
            name: "Product Showcase".to_string(),
            kind: AssetKind::Video,
            size: None,
            duration: Some(15),
            category: "product".to_string(),
            description: "Short video template for product demonstrations".to_string(),
        },
    ]
}

/// Template filter. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub kind: Option<AssetKind>,
    pub category: Option<String>,
}

impl TemplateFilter {
    pub fn matches(&self, template: &VisualTemplate) -> bool {
        self.kind.map_or(true, |kind| template.kind == kind)
            && self
                .category
                .as_deref()
                .map_or(true, |category| template.category == category)
    }
}
