// Keyword extraction from statute titles.
//
// Splits a raw title on whitespace, hyphens, and underscores, then drops
// single-character tokens and stop words. The stop list is the stop-words
// crate's Korean set plus the legal boilerplate tokens (법, 시행, 관한, ...)
// that appear in nearly every statute title and carry no signal.
//
// Extraction runs on the raw title, not the normalized one — normalization
// removes all whitespace, which would leave nothing to split on.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// Tokens too generic to distinguish one statute from another.
const LEGAL_STOP_WORDS: &[&str] = &[
    "법", "령", "규칙", "규정", "시행", "에", "관한", "의", "및", "등",
];

static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let mut words: HashSet<String> = get(LANGUAGE::Korean).into_iter().collect();
    for word in LEGAL_STOP_WORDS {
        words.insert((*word).to_string());
    }
    words
});

/// Extract the distinguishing keywords from a statute title, in title order.
///
/// Tokens shorter than two characters and stop words are dropped. Duplicate
/// tokens are kept — overlap counting treats each occurrence separately.
pub fn extract_keywords(title: &str) -> Vec<String> {
    title
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|token| !token.is_empty())
        .filter(|token| token.chars().count() > 1)
        .filter(|token| !STOP_WORDS.contains(*token))
        .map(|token| token.to_string())
        .collect()
}

/// Count how many of `base` also occur in `other`.
///
/// Each base token counts once per occurrence, so a repeated token in the
/// base list can contribute twice.
pub fn overlap_count(base: &[String], other: &[String]) -> usize {
    let other_set: HashSet<&str> = other.iter().map(String::as_str).collect();
    base.iter().filter(|k| other_set.contains(k.as_str())).count()
}
