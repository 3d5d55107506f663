//! Frequency-ranked keyword extraction.

use std::collections::HashMap;

/// Default number of keywords returned.
pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Words must be longer than this to count.
const MIN_WORD_LENGTH: usize = 3;

/// Most frequent words of `content`, at most `count`.
///
/// Text is lower-cased and stripped of everything but letters and whitespace.
/// Ties keep first-occurrence order.
pub fn extract_keywords(content: &str, count: usize) -> Vec<String> {
    let cleaned: String = content
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();

    let mut order: Vec<&str> = Vec::new();
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() <= MIN_WORD_LENGTH {
            continue;
        }
        let seen = frequency.entry(word).or_insert(0);
        if *seen == 0 {
            order.push(word);
        }
        *seen += 1;
    }

    // Stable sort keeps first-occurrence order among equal counts.
    order.sort_by(|a, b| frequency[b].cmp(&frequency[a]));
    order.into_iter().take(count).map(str::to_string).collect()
}
