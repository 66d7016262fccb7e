// Statute title normalization.
//
// Korean statute titles are written inconsistently across sources: spacing
// varies (개인정보 보호법 vs 개인정보보호법), bracket styles mix half- and
// full-width forms, and connective particles come and go between revisions
// of the same law. Normalization collapses all of that so two spellings of
// the same law compare equal.
//
// The same rules run on both sides of every comparison, so the occasional
// over-strip (e.g. 등 inside 등록) cancels out instead of skewing scores.

use std::sync::LazyLock;

use regex_lite::Regex;

static BRACKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[()（）\[\]【】]").unwrap()
});

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[·･・,、]").unwrap()
});

/// Normalize a statute title for comparison.
///
/// Removes all whitespace (including U+3000), strips brackets and list
/// separators, drops the connectives 및 and 등, rewrites 에관한/에대한 to
/// 관한/대한, and lowercases any Latin letters. Idempotent: normalizing a
/// normalized title is a no-op.
pub fn normalize_title(title: &str) -> String {
    let compact: String = title.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = BRACKETS.replace_all(&compact, "");
    let compact = SEPARATORS.replace_all(&compact, "");

    let mut out = compact.replace('및', "").replace('등', "");

    // Rewrite until stable so stacked particles (에에관한) cannot re-form
    // the pattern after a single pass.
    while out.contains("에관한") {
        out = out.replace("에관한", "관한");
    }
    while out.contains("에대한") {
        out = out.replace("에대한", "대한");
    }

    out.to_lowercase()
}
