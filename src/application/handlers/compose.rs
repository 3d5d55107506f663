//! ComposeHandler - stateless helpers for writing content.

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::domain::content::{
    character_limit, extract_keywords, optimal_posting_times, optimize_for_platform, regenerate,
    scorer, validate_content, ContentError, ContentValidation, Platform, RegeneratedContent,
    RegenerationVariant,
};
use crate::domain::foundation::{QualityScore, StarRating, ValidationError};

/// Everything the editor shows about a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCheck {
    pub platform: Platform,
    pub quality_score: QualityScore,
    pub star_rating: StarRating,
    pub character_count: usize,
    pub character_limit: usize,
    #[serde(flatten)]
    pub validation: ContentValidation,
    pub optimized_content: String,
    pub hashtag_count: usize,
    pub has_call_to_action: bool,
    pub has_emoji: bool,
    pub keywords: Vec<String>,
    pub optimal_posting_times: Vec<String>,
}

/// Handler for regeneration and content checks.
#[derive(Debug, Clone, Default)]
pub struct ComposeHandler;

impl ComposeHandler {
    pub fn new() -> Self {
        Self
    }

    /// Rewrites content in a randomly chosen style.
    pub fn regenerate(
        &self,
        original: &str,
        platform: Platform,
    ) -> Result<RegeneratedContent, ContentError> {
        let variant = RegenerationVariant::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(RegenerationVariant::Transform);
        self.regenerate_with(original, platform, variant)
    }

    /// Rewrites content in the given style.
    pub fn regenerate_with(
        &self,
        original: &str,
        platform: Platform,
        variant: RegenerationVariant,
    ) -> Result<RegeneratedContent, ContentError> {
        if original.trim().is_empty() {
            return Err(ValidationError::empty_field("originalContent").into());
        }
        Ok(regenerate(original, platform, variant))
    }

    /// Scores and validates content for a platform.
    pub fn check(&self, content: &str, platform: Platform, keyword_count: usize) -> ContentCheck {
        let quality_score = scorer::score(content);

        ContentCheck {
            platform,
            quality_score,
            star_rating: quality_score.star_rating(),
            character_count: content.chars().count(),
            character_limit: character_limit(platform),
            validation: validate_content(content, platform),
            optimized_content: optimize_for_platform(content, platform),
            hashtag_count: scorer::count_hashtags(content),
            has_call_to_action: scorer::has_call_to_action(content),
            has_emoji: scorer::has_emoji(content),
            keywords: extract_keywords(content, keyword_count),
            optimal_posting_times: optimal_posting_times(platform)
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn regenerate_uses_one_of_the_variants() {
        let handler = ComposeHandler::new();
        let original = "Our spring collection is here.";
        let result = handler.regenerate(original, Platform::Instagram).unwrap();

        let candidates: Vec<String> = RegenerationVariant::ALL
            .iter()
            .map(|v| v.apply(original))
            .collect();
        assert!(candidates.contains(&result.content));
        assert_eq!(result.title, "Regenerated instagram content");
    }

    #[test]
    fn regenerate_rejects_blank_original() {
        let err = ComposeHandler::new()
            .regenerate("  ", Platform::Twitter)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn check_reports_score_rating_and_limits() {
        let content = "Learn more about our launch! #launch #news";
        let check = ComposeHandler::new().check(content, Platform::Twitter, 5);

        assert_eq!(check.quality_score, scorer::score(content));
        assert_eq!(check.star_rating, check.quality_score.star_rating());
        assert_eq!(check.character_limit, 280);
        assert_eq!(check.hashtag_count, 2);
        assert!(check.has_call_to_action);
        assert!(check.validation.is_valid);
        assert_eq!(check.optimized_content, content);
        assert_eq!(check.optimal_posting_times.len(), 5);
    }

    #[test]
    fn check_flags_over_limit_content() {
        let content = "word ".repeat(40);
        let check = ComposeHandler::new().check(&content, Platform::Tiktok, 3);

        assert!(!check.validation.is_valid);
        assert_eq!(check.optimized_content.chars().count(), 150);
        assert_eq!(check.keywords, vec!["word".to_string()]);
    }
}
