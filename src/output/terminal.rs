// Colored terminal output for match reports and mapping suggestions.
//
// This module handles all terminal-specific formatting: colors, tables,
// summary blocks. The main.rs display functions delegate here.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::matching::suggest::{Suggestion, SuggestionGrade, SUGGEST_POINT_THRESHOLD};
use crate::models::{MatchReport, MatchType};
use crate::stats::MatchStatistics;

/// Display the full match report: per-baseline results, the unmatched
/// list, and the statistics block.
pub fn display_match_report(report: &MatchReport, stats: &MatchStatistics) {
    if report.baseline_total() == 0 {
        println!("Baseline is empty. Fill baseline.json and re-run `gazette match`.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Match Report ({} baseline laws) ===",
            report.baseline_total()
        )
        .bold()
    );
    println!();

    for group in &report.matches {
        let revisions = if group.results.len() > 1 {
            format!("  ({} revisions)", group.results.len())
                .dimmed()
                .to_string()
        } else {
            String::new()
        };
        println!("  {} {}{}", "✓".green(), group.baseline.title.bold(), revisions);

        for result in &group.results {
            println!(
                "      {:<10}  {:<10}  {:>4.2}  {:<8}  {}",
                result.candidate.effective_date,
                result.candidate.status,
                result.score,
                colorize_match_type(result.match_type),
                super::truncate_chars(&result.candidate.title, 40).dimmed(),
            );
        }
    }

    if !report.unmatched.is_empty() {
        println!(
            "\n{}",
            format!("=== Unmatched ({}) ===", report.unmatched.len()).bold()
        );
        for entry in &report.unmatched {
            println!("  {} {}", "✗".red(), entry.title);
        }
    }

    println!();
    display_statistics(stats);
}

/// Display the statistics block.
pub fn display_statistics(stats: &MatchStatistics) {
    println!("{}", "=== Statistics ===".bold());
    println!(
        "  {} of {} baseline laws matched ({:.0}%), {} results total",
        stats.matched_baselines, stats.baseline_total, stats.match_rate, stats.total_matches
    );

    if !stats.by_status.is_empty() {
        let line = stats
            .by_status
            .iter()
            .map(|(label, count)| format!("{label} {count}"))
            .collect::<Vec<_>>()
            .join("  |  ");
        println!("  Status: {line}");
    }

    if !stats.by_month.is_empty() {
        let line = stats
            .by_month
            .iter()
            .map(|(month, count)| format!("{month:02}:{count}"))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  Effective month: {line}");
    }

    print_group("By law type", &stats.by_law_type);
    print_group("By ministry", &stats.by_ministry);
    print_group("By category", &stats.by_category);
}

/// Display ranked mapping suggestions for a prospective baseline law.
pub fn display_suggestions(title: &str, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!(
            "No registry candidates scored {SUGGEST_POINT_THRESHOLD}+ points for \"{title}\"."
        );
        println!("Try `gazette match` for plain title similarity instead.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Mapping candidates for \"{title}\" ===").bold()
    );
    println!();
    println!(
        "  {:>4}  {:>4}  {:<8}  {:<12}  {}",
        "Rank".dimmed(),
        "Pts".dimmed(),
        "Grade".dimmed(),
        "Effective".dimmed(),
        "Title".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "  {:>4}. {:>4}  {:<8}  {:<12}  {}",
            i + 1,
            suggestion.points,
            colorize_grade(suggestion.grade),
            suggestion.candidate.effective_date,
            super::truncate_chars(&suggestion.candidate.title, 44),
        );
        println!(
            "        {}",
            format!("rules: {}", suggestion.rules.join(", ")).dimmed()
        );
    }
    println!();
}

/// Print a label breakdown sorted by count, capped at the top ten.
fn print_group(label: &str, counts: &BTreeMap<String, u32>) {
    if counts.is_empty() {
        return;
    }
    let mut rows: Vec<(&String, &u32)> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("  {label}:");
    for (name, count) in rows.iter().take(10) {
        println!("    {count:>4}  {name}");
    }
    if rows.len() > 10 {
        println!(
            "    {}",
            format!("... and {} more", rows.len() - 10).dimmed()
        );
    }
}

/// Colorize a match confidence tier.
fn colorize_match_type(match_type: MatchType) -> colored::ColoredString {
    let label = match_type.as_str();
    match match_type {
        MatchType::Exact => label.green().bold(),
        MatchType::High => label.green(),
        MatchType::Partial => label.yellow(),
        MatchType::Low => label.dimmed(),
    }
}

/// Colorize a suggestion grade.
fn colorize_grade(grade: SuggestionGrade) -> colored::ColoredString {
    let label = grade.as_str();
    match grade {
        SuggestionGrade::Exact => label.green().bold(),
        SuggestionGrade::High => label.green(),
        SuggestionGrade::Medium => label.yellow(),
        SuggestionGrade::Low => label.dimmed(),
    }
}
