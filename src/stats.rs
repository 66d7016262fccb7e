// Aggregate statistics over a match report.
//
// Buckets every retained result by the registry's own labels — 법령구분
// (law type), 소관부처 (ministry), lifecycle status — plus the baseline's
// category tags and the effective month. Labels come straight from
// upstream data; empty ones land in a 기타 bucket rather than vanishing,
// so the group totals stay reconcilable against the match count.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::MatchReport;

/// Bucket for results whose source field was empty.
const OTHER_LABEL: &str = "기타";

/// Summary counts for one matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub baseline_total: usize,
    pub matched_baselines: usize,
    pub unmatched_baselines: usize,
    /// Total retained results across all baseline entries.
    pub total_matches: usize,
    /// Percentage of baseline entries with at least one match.
    pub match_rate: f64,
    pub by_law_type: BTreeMap<String, u32>,
    pub by_ministry: BTreeMap<String, u32>,
    pub by_status: BTreeMap<String, u32>,
    /// A result contributes once per category on either side of the match,
    /// so this column can sum to more than `total_matches`.
    pub by_category: BTreeMap<String, u32>,
    /// Keyed 1-12; results with unparseable effective dates are absent.
    pub by_month: BTreeMap<u32, u32>,
}

/// Compute the statistics block for a report.
pub fn aggregate(report: &MatchReport) -> MatchStatistics {
    let mut by_law_type = BTreeMap::new();
    let mut by_ministry = BTreeMap::new();
    let mut by_status = BTreeMap::new();
    let mut by_category = BTreeMap::new();
    let mut by_month = BTreeMap::new();

    for group in &report.matches {
        for result in &group.results {
            bump(&mut by_law_type, &result.candidate.law_type);
            bump(&mut by_ministry, &result.candidate.ministry);
            bump(&mut by_status, result.candidate.status.as_str());

            let categories: BTreeSet<&String> = group
                .baseline
                .categories
                .union(&result.candidate.categories)
                .collect();
            for category in categories {
                bump(&mut by_category, category);
            }

            if let Some(month) = month_of(&result.candidate.effective_date) {
                *by_month.entry(month).or_insert(0) += 1;
            } else {
                debug!(
                    date = %result.candidate.effective_date,
                    law = %result.candidate.title,
                    "Skipping unparseable effective date in month breakdown"
                );
            }
        }
    }

    let matched_baselines = report.matches.len();
    let baseline_total = report.baseline_total();
    let match_rate = if baseline_total == 0 {
        0.0
    } else {
        matched_baselines as f64 / baseline_total as f64 * 100.0
    };

    MatchStatistics {
        baseline_total,
        matched_baselines,
        unmatched_baselines: report.unmatched.len(),
        total_matches: report.total_matches(),
        match_rate,
        by_law_type,
        by_ministry,
        by_status,
        by_category,
        by_month,
    }
}

fn bump(map: &mut BTreeMap<String, u32>, label: &str) {
    let key = if label.trim().is_empty() {
        OTHER_LABEL
    } else {
        label
    };
    *map.entry(key.to_string()).or_insert(0) += 1;
}

/// Extract the month from an effective date in either registry form:
/// 8-digit (20250313) or ISO (2025-03-13). Anything else is `None`.
fn month_of(date: &str) -> Option<u32> {
    let digits: String = date.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return None;
    }
    let month: u32 = digits[4..6].parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}
