//! Platform content generation from a strategy analysis.
//!
//! Generation is a pure function of content type, platform, analysis and
//! request index. Templates come from [`super::templates`]; placeholders are
//! substituted in a single pass and the result is scored with
//! [`super::scorer::score`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::scorer;
use super::templates::{resolve_placeholder, select_template, HASHTAGS_PLACEHOLDER};
use super::types::{ContentRecord, ContentType, Platform};
use crate::domain::strategy::StrategyAnalysis;

/// Tags every generated record starts from.
pub const GENERAL_TAGS: [&str; 4] = ["#marketing", "#success", "#growth", "#innovation"];

/// Maximum number of tags in an assembled hashtag string.
pub const MAX_HASHTAGS: usize = 5;

/// Maximum number of pillar-derived tags considered.
pub const MAX_PILLAR_TAGS: usize = 2;

static PLACEHOLDER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// Platform-specific tags, in order.
pub fn platform_tags(platform: Platform) -> [&'static str; 4] {
    match platform {
        Platform::Instagram => ["#instagood", "#photooftheday", "#follow", "#like4like"],
        Platform::Facebook => ["#facebook", "#social", "#community", "#connect"],
        Platform::Twitter => ["#twitter", "#trending", "#discussion", "#share"],
        Platform::Linkedin => ["#linkedin", "#professional", "#business", "#networking"],
        Platform::Tiktok => ["#fyp", "#viral", "#trending", "#creative"],
        Platform::Youtube => ["#youtube", "#subscribe", "#video", "#watch"],
    }
}

/// General tags, then platform tags, then pillar tags; first five, space-joined.
pub fn assemble_hashtags(platform: Platform, analysis: &StrategyAnalysis) -> String {
    let pillar_tags = analysis.pillar_hashtags(MAX_PILLAR_TAGS);

    GENERAL_TAGS
        .iter()
        .chain(platform_tags(platform).iter())
        .copied()
        .chain(pillar_tags.iter().map(String::as_str))
        .take(MAX_HASHTAGS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Substitutes every known placeholder in `template` in one pass.
///
/// `{hashtags}` takes `hashtags`; names without a table entry stay verbatim.
/// Substituted text is never scanned again.
pub fn fill_template(template: &str, analysis: &StrategyAnalysis, hashtags: &str) -> String {
    PLACEHOLDER_TOKEN
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            if name == HASHTAGS_PLACEHOLDER {
                return hashtags.to_string();
            }
            resolve_placeholder(name, analysis).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Generates the `index`-th piece of content for a type and platform.
pub fn generate(
    content_type: ContentType,
    platform: Platform,
    analysis: &StrategyAnalysis,
    index: usize,
) -> ContentRecord {
    let template = select_template(content_type, index);
    let hashtags = assemble_hashtags(platform, analysis);
    let content = fill_template(template, analysis, &hashtags);
    let quality_score = scorer::score(&content);

    ContentRecord {
        content_type,
        platform,
        content,
        hashtags,
        quality_score,
    }
}

/// Generates `min(quantity, max_per_pair)` records for every type and platform.
///
/// Ordering is types outer, platforms middle, index inner.
pub fn generate_batch(
    content_types: &[ContentType],
    platforms: &[Platform],
    quantity: usize,
    max_per_pair: usize,
    analysis: &StrategyAnalysis,
) -> Vec<ContentRecord> {
    let per_pair = quantity.min(max_per_pair);
    let mut records = Vec::with_capacity(content_types.len() * platforms.len() * per_pair);

    for &content_type in content_types {
        for &platform in platforms {
            for index in 0..per_pair {
                records.push(generate(content_type, platform, analysis, index));
            }
        }
    }

    records
}
