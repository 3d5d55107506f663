//! Content type, platform and the generated content record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::QualityScore;

/// Errors raised at the generation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Invalid {field}: '{value}' is not recognized")]
    InvalidArgument { field: &'static str, value: String },
}

impl GenerationError {
    fn invalid(field: &'static str, value: &str) -> Self {
        GenerationError::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }
}

/// Kind of content a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Post,
    Story,
    VideoScript,
    BlogOutline,
    Email,
}

impl ContentType {
    /// All content types in catalog order.
    pub const ALL: [ContentType; 5] = [
        ContentType::Post,
        ContentType::Story,
        ContentType::VideoScript,
        ContentType::BlogOutline,
        ContentType::Email,
    ];

    /// Wire name, as used in JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Story => "story",
            ContentType::VideoScript => "video_script",
            ContentType::BlogOutline => "blog_outline",
            ContentType::Email => "email",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GenerationError::invalid("contentType", s))
    }
}

/// Social platform a piece of content targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Tiktok,
        Platform::Youtube,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| GenerationError::invalid("platform", s))
    }
}

/// One generated piece of content. Built once per generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub platform: Platform,
    pub content: String,
    pub hashtags: String,
    pub quality_score: QualityScore,
}
