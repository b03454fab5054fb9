//! Title canonicalization shared by every matcher.
//!
//! - [`normalize`] - lowercase, unify quotes, strip punctuation, collapse whitespace
//! - [`extract_keywords`] - stopword-filtered token set for similarity scoring

use std::collections::HashSet;

/// Words ignored when building keyword sets.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "it", "its", "are", "was", "were", "be", "been", "will", "would", "could", "should", "has",
    "have", "had", "this", "that", "these", "those", "from", "than", "before", "after",
];

/// Tokens shorter than this many characters are not keywords.
pub const MIN_KEYWORD_LEN: usize = 3;

const QUOTES: &[char] = &['\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Canonicalize a market title for comparison.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if QUOTES.contains(&c) {
                '\''
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the set of meaningful words from a title.
#[must_use]
pub fn extract_keywords(text: &str) -> HashSet<String> {
    normalize(text)
        .split(' ')
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(w))
        .map(str::to_owned)
        .collect()
}
