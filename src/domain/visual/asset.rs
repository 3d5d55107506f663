//! Catalogued image and video assets.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::VisualTemplate;
use crate::domain::foundation::{Timestamp, ValidationError, VisualAssetId};

/// File extensions accepted for visual assets.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "mp4", "mov", "avi"];

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

/// Largest accepted asset, in bytes (50 MiB).
pub const MAX_ASSET_SIZE: u64 = 50 * 1024 * 1024;

pub const UPLOADED: &str = "uploaded";
pub const CUSTOMIZED: &str = "customized";
pub const GENERATED: &str = "generated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(AssetKind::Image),
            "video" => Ok(AssetKind::Video),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown asset type '{}'", other),
            )),
        }
    }
}

/// Metadata describing an asset file to register.
#[derive(Debug, Clone, Default)]
pub struct NewVisualAsset {
    pub original_name: String,
    pub file_size: u64,
    pub mime_type: Option<String>,
    pub file_path: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// An image or video known to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualAsset {
    pub id: VisualAssetId,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<Value>,
    pub created_at: Timestamp,
}

impl VisualAsset {
    /// Validates file metadata and catalogues it.
    ///
    /// The kind follows the mime type when one is given, otherwise the
    /// extension. A blank category becomes `uploaded`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` when the original name is blank
    /// - `InvalidFormat` for extensions other than jpg, jpeg, png, gif, mp4, mov, avi
    /// - `OutOfRange` when the file is larger than 50 MiB
    pub fn register(input: NewVisualAsset) -> Result<Self, ValidationError> {
        let original_name = input.original_name.trim().to_string();
        if original_name.is_empty() {
            return Err(ValidationError::empty_field("originalName"));
        }

        let extension = Path::new(&original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ValidationError::invalid_format(
                "originalName",
                "Only image and video files are allowed",
            ));
        }

        if input.file_size > MAX_ASSET_SIZE {
            return Err(ValidationError::out_of_range(
                "fileSize",
                0,
                MAX_ASSET_SIZE as i32,
                i32::try_from(input.file_size).unwrap_or(i32::MAX),
            ));
        }

        let kind = match input.mime_type.as_deref() {
            Some(mime) if !mime.trim().is_empty() => {
                if mime.starts_with("video/") {
                    AssetKind::Video
                } else {
                    AssetKind::Image
                }
            }
            _ if VIDEO_EXTENSIONS.contains(&extension.as_str()) => AssetKind::Video,
            _ => AssetKind::Image,
        };

        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UPLOADED.to_string());

        Ok(Self {
            id: VisualAssetId::new(),
            kind,
            name: original_name.clone(),
            category,
            description: input.description.filter(|d| !d.trim().is_empty()),
            original_name: Some(original_name),
            file_path: input.file_path,
            file_size: input.file_size,
            template_id: None,
            template_name: None,
            customization: None,
            created_at: Timestamp::now(),
        })
    }

    /// A new asset derived from `template` with the given options.
    pub fn customize(template: &VisualTemplate, customization: Option<Value>) -> Self {
        Self {
            id: VisualAssetId::new(),
            kind: template.kind,
            name: format!("Customized {}", template.name),
            category: CUSTOMIZED.to_string(),
            description: Some(template.description.clone()),
            original_name: None,
            file_path: None,
            file_size: 0,
            template_id: Some(template.id),
            template_name: Some(template.name.clone()),
            customization: customization.filter(|c| !c.is_null()),
            created_at: Timestamp::now(),
        }
    }
}
