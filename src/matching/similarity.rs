// Similarity scoring for normalized statute titles.
//
// Three rules, checked in order:
//
//   1. Identical strings score 1.0.
//   2. If one title contains the other, score len(shorter)/len(longer) * 0.9.
//      This is the 시행령/시행규칙 case — a decree title embeds its parent
//      law's title, and the 0.9 cap keeps containment below an exact match.
//   3. Otherwise, Jaccard similarity over the character sets.
//
// Character-set Jaccard ignores ordering, so unrelated laws sharing a few
// characters earn a small score. Known coarseness: the retention threshold
// in the matcher filters most of that noise out.

use std::collections::HashSet;

/// Score two normalized titles from 0.0 (disjoint) to 1.0 (identical).
///
/// Symmetric in its arguments. Lengths are counted in characters, not
/// bytes, so Hangul and Latin mix safely.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    if a.contains(b) || b.contains(a) {
        let len_a = a.chars().count() as f64;
        let len_b = b.chars().count() as f64;
        let shorter = len_a.min(len_b);
        let longer = len_a.max(len_b);
        return shorter / longer * 0.9;
    }

    char_jaccard(a, b)
}

/// Jaccard similarity over the sets of characters in each title.
fn char_jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}
