//! Quality scorer - the single heuristic every call site uses.
//!
//! Points are awarded per bucket and summed, then clamped to 100:
//!
//! | Bucket          | Points                                      |
//! |-----------------|---------------------------------------------|
//! | Length          | 20 for 51-299 chars, 15 for 300+, 10 for 21-50 |
//! | Hashtags        | 5 each, at most 15                          |
//! | Call to action  | 20                                          |
//! | Emoji           | 10                                          |
//! | Question mark   | 10                                          |
//! | Exclamation     | 5                                           |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::QualityScore;

/// Words that mark a call to action, matched case-insensitively as substrings.
pub const CALL_TO_ACTION_WORDS: &[&str] = &[
    "click",
    "learn",
    "discover",
    "visit",
    "follow",
    "share",
    "subscribe",
    "download",
];

/// Code point ranges treated as emoji.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F600, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport & map
    (0x1F900, 0x1F9FF), // supplemental pictographs
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
];

const HASHTAG_POINTS: u32 = 5;
const HASHTAG_CAP: u32 = 15;

static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("hashtag pattern is valid"));

/// Scores a piece of content. Total over all strings; `""` scores 0.
pub fn score(content: &str) -> QualityScore {
    let points = length_points(content)
        + hashtag_points(content)
        + call_to_action_points(content)
        + emoji_points(content)
        + question_points(content)
        + exclamation_points(content);

    QualityScore::from_points(points)
}

fn length_points(content: &str) -> u32 {
    let len = content.chars().count();
    if len > 50 && len < 300 {
        20
    } else if len >= 300 {
        15
    } else if len > 20 {
        10
    } else {
        0
    }
}

/// Number of `#word` tokens in the content.
pub fn count_hashtags(content: &str) -> usize {
    HASHTAG.find_iter(content).count()
}

fn hashtag_points(content: &str) -> u32 {
    let count = u32::try_from(count_hashtags(content)).unwrap_or(u32::MAX);
    count.saturating_mul(HASHTAG_POINTS).min(HASHTAG_CAP)
}

/// True when the content contains a call-to-action word.
pub fn has_call_to_action(content: &str) -> bool {
    let lowered = content.to_lowercase();
    CALL_TO_ACTION_WORDS.iter().any(|w| lowered.contains(w))
}

fn call_to_action_points(content: &str) -> u32 {
    if has_call_to_action(content) {
        20
    } else {
        0
    }
}

/// True when any character falls in a common emoji block.
pub fn has_emoji(content: &str) -> bool {
    content.chars().any(|c| {
        let cp = u32::from(c);
        EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
    })
}

fn emoji_points(content: &str) -> u32 {
    if has_emoji(content) {
        10
    } else {
        0
    }
}

fn question_points(content: &str) -> u32 {
    if content.contains('?') {
        10
    } else {
        0
    }
}

fn exclamation_points(content: &str) -> u32 {
    if content.contains('!') {
        5
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn points(content: &str) -> u8 {
        score(content).value()
    }

    #[test]
    fn empty_content_scores_zero() {
        assert_eq!(points(""), 0);
    }

    #[test]
    fn length_buckets() {
        assert_eq!(points(&"a".repeat(20)), 0);
        assert_eq!(points(&"a".repeat(21)), 10);
        assert_eq!(points(&"a".repeat(50)), 10);
        assert_eq!(points(&"a".repeat(51)), 20);
        assert_eq!(points(&"a".repeat(299)), 20);
        assert_eq!(points(&"a".repeat(300)), 15);
        assert_eq!(points(&"a".repeat(1000)), 15);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 21 two-byte characters
        assert_eq!(points(&"é".repeat(21)), 10);
    }

    #[test]
    fn hashtags_are_capped_at_fifteen() {
        assert_eq!(points("#a"), 5);
        assert_eq!(points("#a #b"), 10);
        assert_eq!(points("#a #b #c"), 15);
        assert_eq!(points("#a #b #c #d #e"), 15);
    }

    #[test]
    fn bare_hash_is_not_a_hashtag() {
        assert_eq!(count_hashtags("# heading"), 0);
        assert_eq!(count_hashtags("#1 fan #go_team"), 2);
    }

    #[test]
    fn call_to_action_is_case_insensitive_flag() {
        assert_eq!(points("Subscribe"), 20);
        assert_eq!(points("click share follow"), 20);
    }

    #[test]
    fn emoji_question_and_exclamation() {
        assert_eq!(points("🚀"), 10);
        assert_eq!(points("☀"), 10);
        assert_eq!(points("?"), 10);
        assert_eq!(points("!"), 5);
        assert_eq!(points("a"), 0);
    }

    #[test]
    fn everything_combined_clamps_to_hundred() {
        let content = format!(
            "🚀 Ready to grow? Click to learn more! {} #one #two #three",
            "x".repeat(40)
        );
        // 20 length + 15 tags + 20 cta + 10 emoji + 10 question + 5 exclamation
        assert_eq!(points(&content), 80);
    }

    #[test]
    fn generated_style_post_scores_as_expected() {
        let content = "💡 Innovation: Quality is our commitment What's your experience with this? #marketing #success #growth #innovation #instagood";
        // 20 length + 15 tags + 10 emoji + 10 question
        assert_eq!(points(content), 55);
    }

    proptest! {
        #[test]
        fn score_is_bounded(s in ".*") {
            let v = score(&s).value();
            prop_assert!(v <= 100);
        }

        #[test]
        fn score_is_pure(s in ".*") {
            prop_assert_eq!(score(&s), score(&s));
        }

        #[test]
        fn adding_question_mark_never_lowers(s in "[a-z ]{0,40}") {
            // Stay within one length bucket: 40 + 1 chars never crosses 50.
            prop_assume!(!s.contains('?'));
            let with = format!("{}?", s);
            prop_assert!(score(&with) >= score(&s));
        }

        #[test]
        fn adding_exclamation_never_lowers(s in "[a-z ]{0,40}") {
            let with = format!("{}!", s);
            prop_assert!(score(&with) >= score(&s));
        }

        #[test]
        fn adding_first_hashtag_never_lowers(s in "[a-z ]{51,200}") {
            prop_assume!(count_hashtags(&s) == 0);
            let with = format!("{} #tag", s);
            prop_assert!(score(&with) >= score(&s));
        }
    }
}
