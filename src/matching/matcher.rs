// Baseline-to-registry matching.
//
// Every baseline law is compared against every record in the registry
// snapshot — O(B x C), which is fine at this scale (a few hundred baseline
// laws against a few thousand statutes per year). Two modes:
//
//   Exact — normalized titles must be equal; retained with score 1.0.
//   Fuzzy — similarity over normalized titles, retained at or above
//           the threshold.
//
// A registry record can be retained by at most one baseline entry: when two
// entries claim the same record, the higher score wins, and a tie stays with
// the earlier entry so repeated runs give identical output. One baseline
// entry can still hold several records — typically the same law at several
// effective dates.

use tracing::info;

use crate::matching::normalize::normalize_title;
use crate::matching::similarity::similarity;
use crate::models::{
    BaselineEntry, BaselineMatches, MatchReport, MatchResult, MatchType, StatuteRecord,
};

/// Minimum similarity for a fuzzy match to be retained.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// How candidate statutes are paired with baseline entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchMode {
    /// Normalized titles must be equal.
    Exact,
    /// Retain any candidate scoring at or above the threshold.
    Fuzzy { threshold: f64 },
}

impl MatchMode {
    /// Fuzzy matching at the default threshold.
    pub fn fuzzy() -> Self {
        MatchMode::Fuzzy {
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Fuzzy { .. } => "fuzzy",
        }
    }

    pub fn threshold(&self) -> Option<f64> {
        match self {
            MatchMode::Exact => None,
            MatchMode::Fuzzy { threshold } => Some(*threshold),
        }
    }
}

/// The winning baseline for one candidate record.
#[derive(Debug, Clone, Copy)]
struct Claim {
    baseline_idx: usize,
    score: f64,
}

/// Match every baseline entry against the candidate snapshot.
///
/// Each baseline entry ends up either in `matches` (with its retained
/// results sorted best-first) or in `unmatched` — never both, never
/// neither. Entries whose titles normalize to the empty string cannot
/// match anything and surface as unmatched.
pub fn match_baselines(
    baselines: &[BaselineEntry],
    candidates: &[StatuteRecord],
    mode: MatchMode,
) -> MatchReport {
    let normalized_candidates: Vec<String> = candidates
        .iter()
        .map(|c| normalize_title(&c.title))
        .collect();

    // Best claim per candidate, indexed by snapshot position. Replacement
    // requires a strictly higher score, so ties stay with the earlier
    // baseline entry and runs are deterministic.
    let mut claims: Vec<Option<Claim>> = vec![None; candidates.len()];

    for (b_idx, baseline) in baselines.iter().enumerate() {
        let normalized = normalize_title(&baseline.title);
        if normalized.is_empty() {
            continue;
        }

        for (c_idx, candidate_norm) in normalized_candidates.iter().enumerate() {
            if candidate_norm.is_empty() {
                continue;
            }

            let score = match mode {
                MatchMode::Exact => {
                    if *candidate_norm != normalized {
                        continue;
                    }
                    1.0
                }
                MatchMode::Fuzzy { threshold } => {
                    let s = similarity(&normalized, candidate_norm);
                    if s < threshold {
                        continue;
                    }
                    s
                }
            };

            let replace = match claims[c_idx] {
                None => true,
                Some(existing) => score > existing.score,
            };
            if replace {
                claims[c_idx] = Some(Claim {
                    baseline_idx: b_idx,
                    score,
                });
            }
        }
    }

    // Regroup surviving claims under their baseline entries.
    let mut buckets: Vec<Vec<MatchResult>> = vec![Vec::new(); baselines.len()];
    for (c_idx, claim) in claims.iter().enumerate() {
        if let Some(claim) = claim {
            let baseline = &baselines[claim.baseline_idx];
            buckets[claim.baseline_idx].push(MatchResult {
                baseline_id: baseline.id.clone(),
                baseline_title: baseline.title.clone(),
                candidate: candidates[c_idx].clone(),
                score: claim.score,
                match_type: MatchType::from_score(claim.score),
            });
        }
    }

    let mut matches = Vec::new();
    let mut unmatched = Vec::new();
    for (b_idx, baseline) in baselines.iter().enumerate() {
        let mut results = std::mem::take(&mut buckets[b_idx]);
        if results.is_empty() {
            unmatched.push(baseline.clone());
            continue;
        }
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.candidate.effective_date.cmp(&b.candidate.effective_date))
                .then_with(|| a.candidate.id.cmp(&b.candidate.id))
        });
        matches.push(BaselineMatches {
            baseline: baseline.clone(),
            results,
        });
    }

    info!(
        baselines = baselines.len(),
        candidates = candidates.len(),
        matched = matches.len(),
        unmatched = unmatched.len(),
        results = matches.iter().map(|m| m.results.len()).sum::<usize>(),
        mode = mode.as_str(),
        "Matching complete"
    );

    MatchReport { matches, unmatched }
}
