// Mapping suggestions for new baseline entries.
//
// When a law is about to be added to the applied-law baseline, this module
// ranks the registry snapshot by how plausibly each record corresponds to
// it. Unlike the matcher's single similarity score, suggestions accumulate
// points from independent rules, so a title rewrite (e.g. a renamed act)
// can still surface through keyword and category evidence:
//
//   +100  normalized titles are identical
//    +50  enough title keywords overlap
//    +20  same law type (시행령, 고시, ...)
//    +30  shared category
//
// Candidates below 50 points are dropped.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::matching::keywords::{extract_keywords, overlap_count};
use crate::matching::normalize::normalize_title;
use crate::models::StatuteRecord;

pub const SUGGEST_POINT_THRESHOLD: u32 = 50;

/// Confidence grade for an accumulated point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionGrade {
    Exact,
    High,
    Medium,
    Low,
}

impl SuggestionGrade {
    pub fn from_points(points: u32) -> Self {
        match points {
            p if p >= 150 => SuggestionGrade::Exact,
            p if p >= 100 => SuggestionGrade::High,
            p if p >= 70 => SuggestionGrade::Medium,
            _ => SuggestionGrade::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionGrade::Exact => "exact",
            SuggestionGrade::High => "high",
            SuggestionGrade::Medium => "medium",
            SuggestionGrade::Low => "low",
        }
    }
}

impl std::fmt::Display for SuggestionGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One ranked registry record with the rules that scored it.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub candidate: StatuteRecord,
    pub points: u32,
    pub grade: SuggestionGrade,
    pub rules: Vec<&'static str>,
}

/// Rank `candidates` as mapping targets for a prospective baseline law.
///
/// `categories` may be empty; the category rule simply never fires then.
/// Results are sorted by points (best first) and truncated to `limit`.
pub fn suggest(
    title: &str,
    categories: &BTreeSet<String>,
    candidates: &[StatuteRecord],
    limit: usize,
) -> Vec<Suggestion> {
    let normalized = normalize_title(title);
    let base_keywords = extract_keywords(title);
    let base_law_type = extract_law_type(title);

    // matched >= min(2, 0.6 * |keywords|): one shared keyword is enough for
    // very short titles, two once the title has four or more.
    let required_overlap = 2.0_f64.min(base_keywords.len() as f64 * 0.6);

    let mut suggestions: Vec<Suggestion> = candidates
        .iter()
        .filter_map(|candidate| {
            let mut points = 0;
            let mut rules = Vec::new();

            if !normalized.is_empty() && normalize_title(&candidate.title) == normalized {
                points += 100;
                rules.push("exact-title");
            }

            if !base_keywords.is_empty() {
                let candidate_keywords = extract_keywords(&candidate.title);
                let matched = overlap_count(&base_keywords, &candidate_keywords);
                if matched as f64 >= required_overlap {
                    points += 50;
                    rules.push("keyword-overlap");
                }
            }

            if extract_law_type(&candidate.title) == base_law_type {
                points += 20;
                rules.push("law-type");
            }

            if categories.intersection(&candidate.categories).next().is_some() {
                points += 30;
                rules.push("category");
            }

            if points < SUGGEST_POINT_THRESHOLD {
                return None;
            }

            Some(Suggestion {
                candidate: candidate.clone(),
                points,
                grade: SuggestionGrade::from_points(points),
                rules,
            })
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.candidate.effective_date.cmp(&b.candidate.effective_date))
            .then_with(|| a.candidate.id.cmp(&b.candidate.id))
    });
    suggestions.truncate(limit);
    suggestions
}

/// Classify a statute title by its instrument type suffix.
///
/// Checks run in specificity order — 시행령 before the bare 법 test, so a
/// decree is never classified as its parent law.
pub fn extract_law_type(title: &str) -> &'static str {
    if title.contains("시행령") {
        "시행령"
    } else if title.contains("시행규칙") {
        "시행규칙"
    } else if title.contains("고시") {
        "고시"
    } else if title.contains("훈령") {
        "훈령"
    } else if title.contains("예규") {
        "예규"
    } else if title.contains("법") && !title.contains("시행") {
        "법률"
    } else {
        "기타"
    }
}
