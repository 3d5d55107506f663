//! Per-platform limits, length checks and posting slots.

use serde::{Deserialize, Serialize};

use super::types::Platform;

/// Minimum length accepted by [`validate_content`].
pub const MIN_CONTENT_LENGTH: usize = 10;

const ELLIPSIS: &str = "...";

/// Character limit for a single piece of content on `platform`.
pub fn character_limit(platform: Platform) -> usize {
    match platform {
        Platform::Twitter => 280,
        Platform::Instagram => 2200,
        Platform::Facebook => 63206,
        Platform::Linkedin => 3000,
        Platform::Tiktok => 150,
        Platform::Youtube => 5000,
    }
}

/// Truncates `content` to the platform limit, ending in `...` when cut.
pub fn optimize_for_platform(content: &str, platform: Platform) -> String {
    let limit = character_limit(platform);
    if content.chars().count() <= limit {
        return content.to_string();
    }

    let mut optimized: String = content.chars().take(limit - ELLIPSIS.len()).collect();
    optimized.push_str(ELLIPSIS);
    optimized
}

/// Result of [`validate_content`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks content against the emptiness, minimum length and platform limit rules.
pub fn validate_content(content: &str, platform: Platform) -> ContentValidation {
    let mut errors = Vec::new();
    let length = content.chars().count();

    if content.trim().is_empty() {
        errors.push("Content cannot be empty".to_string());
    }
    if length < MIN_CONTENT_LENGTH {
        errors.push(format!(
            "Content is too short (minimum {} characters)",
            MIN_CONTENT_LENGTH
        ));
    }
    let limit = character_limit(platform);
    if length > limit {
        errors.push(format!(
            "Content exceeds {} limit of {} characters",
            platform, limit
        ));
    }

    ContentValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Five suggested HH:MM posting slots for `platform`, earliest first.
pub fn optimal_posting_times(platform: Platform) -> [&'static str; 5] {
    match platform {
        Platform::Instagram => ["09:00", "11:00", "13:00", "17:00", "19:00"],
        Platform::Facebook => ["09:00", "13:00", "15:00", "20:00", "21:00"],
        Platform::Twitter => ["08:00", "12:00", "17:00", "19:00", "20:00"],
        Platform::Linkedin => ["07:00", "08:00", "12:00", "17:00", "18:00"],
        Platform::Tiktok => ["06:00", "10:00", "19:00", "20:00", "21:00"],
        Platform::Youtube => ["14:00", "15:00", "20:00", "21:00", "22:00"],
    }
}
