//! Rewrites of existing content in one of a few fixed styles.

use serde::{Deserialize, Serialize};

use super::scorer;
use super::types::Platform;
use crate::domain::foundation::QualityScore;

/// Rewrite style applied by [`regenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerationVariant {
    /// Energetic close, trailing punctuation dropped.
    Momentum,
    /// Whole text lower-cased behind a "fresh perspective" lead.
    FreshPerspective,
    /// Original text followed by a question.
    Transform,
    /// Leading symbols and emoji stripped.
    Focus,
}

impl RegenerationVariant {
    pub const ALL: [RegenerationVariant; 4] = [
        RegenerationVariant::Momentum,
        RegenerationVariant::FreshPerspective,
        RegenerationVariant::Transform,
        RegenerationVariant::Focus,
    ];

    /// Applies this variant to `original`.
    pub fn apply(&self, original: &str) -> String {
        match self {
            RegenerationVariant::Momentum => {
                let trimmed = original
                    .strip_suffix(&['.', '!', '?'][..])
                    .unwrap_or(original);
                format!("🚀 {} - let's make it happen! #Success #Growth", trimmed)
            }
            RegenerationVariant::FreshPerspective => format!(
                "💡 Here's a fresh perspective: {} #Innovation #Ideas",
                original.to_lowercase()
            ),
            RegenerationVariant::Transform => format!(
                "✨ Transform your approach: {} What's your next step? #Transformation #Action",
                original
            ),
            RegenerationVariant::Focus => format!(
                "🎯 Focus on this: {} #Focus #Results",
                original.trim_start_matches(|c: char| !c.is_ascii_alphabetic())
            ),
        }
    }
}

/// Regenerated content with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegeneratedContent {
    pub content: String,
    pub title: String,
    pub quality_score: QualityScore,
}

/// Rewrites `original` for `platform` using `variant`.
pub fn regenerate(
    original: &str,
    platform: Platform,
    variant: RegenerationVariant,
) -> RegeneratedContent {
    let content = variant.apply(original);
    let quality_score = scorer::score(&content);

    RegeneratedContent {
        title: format!("Regenerated {} content", platform),
        content,
        quality_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_drops_one_trailing_mark() {
        assert_eq!(
            RegenerationVariant::Momentum.apply("Ship it!!"),
            "🚀 Ship it! - let's make it happen! #Success #Growth"
        );
        assert_eq!(
            RegenerationVariant::Momentum.apply("Ship it"),
            "🚀 Ship it - let's make it happen! #Success #Growth"
        );
    }

    #[test]
    fn fresh_perspective_lowercases() {
        assert_eq!(
            RegenerationVariant::FreshPerspective.apply("Big NEWS"),
            "💡 Here's a fresh perspective: big news #Innovation #Ideas"
        );
    }

    #[test]
    fn transform_keeps_original() {
        assert_eq!(
            RegenerationVariant::Transform.apply("Plan ahead."),
            "✨ Transform your approach: Plan ahead. What's your next step? #Transformation #Action"
        );
    }

    #[test]
    fn focus_strips_leading_non_letters() {
        assert_eq!(
            RegenerationVariant::Focus.apply("🎉 2x growth"),
            "🎯 Focus on this: x growth #Focus #Results"
        );
    }

    #[test]
    fn regenerate_titles_and_scores_result() {
        let result = regenerate(
            "Learn how we grew.",
            Platform::Linkedin,
            RegenerationVariant::Transform,
        );
        assert_eq!(result.title, "Regenerated linkedin content");
        assert_eq!(result.quality_score, scorer::score(&result.content));
    }

    #[test]
    fn every_variant_adds_hashtags() {
        for variant in RegenerationVariant::ALL {
            let result = regenerate("Hello world", Platform::Twitter, variant);
            assert!(scorer::count_hashtags(&result.content) >= 2);
        }
    }
}
