// Data models — the types that flow through the matching pipeline.
//
// Everything here is already normalized: Korean registry field names and
// their romanized variants are resolved at the API boundary (lawgo::schema),
// so the rest of the crate never sees raw wire shapes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One statute from the national registry snapshot.
///
/// `id` is the registry's law ID and is the record's identity for
/// deduplication purposes; the same law can still appear several times
/// with different effective dates (one record per revision).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteRecord {
    pub id: String,
    pub title: String,
    /// ISO date (YYYY-MM-DD); empty when the registry omitted it.
    pub effective_date: String,
    pub promulgation_date: String,
    /// 제정 / 일부개정 / 전부개정 / 폐지 as reported by the registry.
    pub amendment_type: String,
    /// 법률 / 대통령령 / 총리령 / 부령 etc. as reported by the registry.
    pub law_type: String,
    pub ministry: String,
    pub status: StatuteStatus,
    #[serde(default)]
    pub categories: BTreeSet<String>,
}

/// One law from the company's applied-law baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub categories: BTreeSet<String>,
}

/// Lifecycle state of a statute, mapped from the registry's Korean labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatuteStatus {
    Current,
    Scheduled,
    Historical,
    Unknown,
}

impl StatuteStatus {
    /// Map a registry status label. Unrecognized or empty labels become
    /// `Unknown` rather than an error — upstream data is inconsistent.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "현행" => StatuteStatus::Current,
            "시행예정" | "예정" => StatuteStatus::Scheduled,
            "연혁" => StatuteStatus::Historical,
            _ => StatuteStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatuteStatus::Current => "current",
            StatuteStatus::Scheduled => "scheduled",
            StatuteStatus::Historical => "historical",
            StatuteStatus::Unknown => "unknown",
        }
    }
}

impl Default for StatuteStatus {
    fn default() -> Self {
        StatuteStatus::Unknown
    }
}

impl std::fmt::Display for StatuteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Confidence tier for a fuzzy match score (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    High,
    Partial,
    Low,
}

impl MatchType {
    /// Determine the tier from a similarity score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.95 => MatchType::Exact,
            s if s >= 0.8 => MatchType::High,
            s if s >= 0.7 => MatchType::Partial,
            _ => MatchType::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::High => "high",
            MatchType::Partial => "partial",
            MatchType::Low => "low",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One retained pairing of a baseline law with a registry statute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub baseline_id: String,
    pub baseline_title: String,
    pub candidate: StatuteRecord,
    pub score: f64,
    pub match_type: MatchType,
}

/// All matches for a single baseline entry, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineMatches {
    pub baseline: BaselineEntry,
    pub results: Vec<MatchResult>,
}

/// The full outcome of one matching run. Every baseline entry lands in
/// exactly one of the two lists, so `matches.len() + unmatched.len()`
/// always equals the baseline size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<BaselineMatches>,
    pub unmatched: Vec<BaselineEntry>,
}

impl MatchReport {
    pub fn baseline_total(&self) -> usize {
        self.matches.len() + self.unmatched.len()
    }

    pub fn total_matches(&self) -> usize {
        self.matches.iter().map(|m| m.results.len()).sum()
    }

    /// Iterate over every retained result across all baseline entries.
    pub fn iter_results(&self) -> impl Iterator<Item = &MatchResult> {
        self.matches.iter().flat_map(|m| m.results.iter())
    }
}
