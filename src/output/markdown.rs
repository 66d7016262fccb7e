// Markdown report generation — a shareable summary of one matching run.
//
// Mirrors the terminal report: summary numbers, the per-baseline match
// table, the unmatched list, and the statistics breakdowns. The file is
// meant to be committed or pasted into compliance records, so it carries
// no color codes and keeps tables plain.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::models::MatchReport;
use crate::stats::MatchStatistics;

/// Render the report to markdown and write it to `path`.
///
/// Returns the path written, for display. Parent directories are created
/// as needed.
pub fn generate_report(
    report: &MatchReport,
    stats: &MatchStatistics,
    year: i32,
    path: &str,
) -> Result<String> {
    let body = render(report, stats, year);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory {}", parent.display())
            })?;
        }
    }
    fs::write(path, body).with_context(|| format!("Failed to write report to {path}"))?;

    Ok(path.to_string())
}

fn render(report: &MatchReport, stats: &MatchStatistics, year: i32) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {year} Statute Match Report\n\n"));
    md.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    md.push_str("## Summary\n\n");
    md.push_str("| | |\n|---|---|\n");
    md.push_str(&format!("| Baseline laws | {} |\n", stats.baseline_total));
    md.push_str(&format!(
        "| Matched | {} ({:.0}%) |\n",
        stats.matched_baselines, stats.match_rate
    ));
    md.push_str(&format!("| Unmatched | {} |\n", stats.unmatched_baselines));
    md.push_str(&format!("| Total matches | {} |\n\n", stats.total_matches));

    if !report.matches.is_empty() {
        md.push_str("## Matches\n\n");
        md.push_str("| Baseline | Registry title | Effective | Status | Score | Tier |\n");
        md.push_str("|---|---|---|---|---|---|\n");
        for group in &report.matches {
            for result in &group.results {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {:.2} | {} |\n",
                    cell(&group.baseline.title),
                    cell(&result.candidate.title),
                    result.candidate.effective_date,
                    result.candidate.status,
                    result.score,
                    result.match_type,
                ));
            }
        }
        md.push('\n');
    }

    if !report.unmatched.is_empty() {
        md.push_str("## Unmatched\n\n");
        for entry in &report.unmatched {
            md.push_str(&format!("- {} ({})\n", cell(&entry.title), cell(&entry.id)));
        }
        md.push('\n');
    }

    md.push_str("## Statistics\n\n");
    push_count_table(&mut md, "By law type", "Law type", &stats.by_law_type);
    push_count_table(&mut md, "By ministry", "Ministry", &stats.by_ministry);
    push_count_table(&mut md, "By status", "Status", &stats.by_status);
    push_count_table(&mut md, "By category", "Category", &stats.by_category);

    if !stats.by_month.is_empty() {
        md.push_str("### By effective month\n\n");
        md.push_str("| Month | Count |\n|---|---|\n");
        for (month, count) in &stats.by_month {
            md.push_str(&format!("| {month:02} | {count} |\n"));
        }
        md.push('\n');
    }

    md
}

/// One "label, count" table, sorted by count descending.
fn push_count_table(
    md: &mut String,
    heading: &str,
    key_header: &str,
    counts: &BTreeMap<String, u32>,
) {
    if counts.is_empty() {
        return;
    }
    let mut rows: Vec<(&String, &u32)> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    md.push_str(&format!("### {heading}\n\n"));
    md.push_str(&format!("| {key_header} | Count |\n|---|---|\n"));
    for (name, count) in rows {
        md.push_str(&format!("| {} | {} |\n", cell(name), count));
    }
    md.push('\n');
}

/// Escape table-breaking pipes in user-supplied text.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BaselineEntry, BaselineMatches, MatchResult, MatchType, StatuteRecord, StatuteStatus,
    };
    use crate::stats;

    fn sample_report() -> MatchReport {
        let baseline = BaselineEntry {
            id: "LAW-001".to_string(),
            title: "개인정보 보호법".to_string(),
            categories: ["개인정보"].iter().map(|c| c.to_string()).collect(),
        };
        let candidate = StatuteRecord {
            id: "011357".to_string(),
            title: "개인정보보호법".to_string(),
            effective_date: "2025-03-13".to_string(),
            promulgation_date: "2024-03-12".to_string(),
            amendment_type: "일부개정".to_string(),
            law_type: "법률".to_string(),
            ministry: "개인정보보호위원회".to_string(),
            status: StatuteStatus::Current,
            categories: Default::default(),
        };
        MatchReport {
            matches: vec![BaselineMatches {
                results: vec![MatchResult {
                    baseline_id: baseline.id.clone(),
                    baseline_title: baseline.title.clone(),
                    candidate,
                    score: 1.0,
                    match_type: MatchType::Exact,
                }],
                baseline,
            }],
            unmatched: vec![BaselineEntry {
                id: "LAW-002".to_string(),
                title: "폐지된특별법".to_string(),
                categories: Default::default(),
            }],
        }
    }

    #[test]
    fn test_render_covers_all_sections() {
        let report = sample_report();
        let stats = stats::aggregate(&report);
        let md = render(&report, &stats, 2025);

        assert!(md.starts_with("# 2025 Statute Match Report"));
        assert!(md.contains("| Baseline laws | 2 |"));
        assert!(md.contains("| Matched | 1 (50%) |"));
        assert!(md.contains(
            "| 개인정보 보호법 | 개인정보보호법 | 2025-03-13 | current | 1.00 | exact |"
        ));
        assert!(md.contains("- 폐지된특별법 (LAW-002)"));
        assert!(md.contains("### By law type"));
        assert!(md.contains("| 법률 | 1 |"));
        assert!(md.contains("### By effective month"));
        assert!(md.contains("| 03 | 1 |"));
    }

    #[test]
    fn test_pipes_in_titles_are_escaped() {
        let mut report = sample_report();
        report.matches[0].baseline.title = "산업|안전".to_string();
        let stats = stats::aggregate(&report);
        let md = render(&report, &stats, 2025);

        assert!(md.contains("산업\\|안전"));
    }

    #[test]
    fn test_generate_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join("reports")
            .join("2025.md")
            .to_string_lossy()
            .to_string();

        let report = sample_report();
        let stats = stats::aggregate(&report);
        let written = generate_report(&report, &stats, 2025, &path).unwrap();

        assert_eq!(written, path);
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("# 2025 Statute Match Report"));
    }
}
