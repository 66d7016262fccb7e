// System status display — data directory, baseline, snapshots, reports.

use anyhow::Result;

use crate::store::Store;

/// Display store status to the terminal.
pub fn show(store: &Store) -> Result<()> {
    println!("Data directory: {}", store.root().display());

    if store.baseline_path().exists() {
        match store.load_baseline() {
            Ok(baseline) => println!("Baseline: {} applied laws", baseline.items.len()),
            Err(e) => println!("Baseline: unreadable ({e})"),
        }
    } else {
        println!("Baseline: not found");
        println!("  Run `gazette init` to create an empty baseline.json");
    }

    let years = store.snapshot_years()?;
    if years.is_empty() {
        println!("Snapshots: none");
        println!("  Run `gazette fetch` to download a year of the registry");
        return Ok(());
    }

    println!("Snapshots:");
    for year in &years {
        let path = store.snapshot_path(*year);
        let size = std::fs::metadata(&path)
            .map(|m| format_bytes(m.len()))
            .unwrap_or_else(|_| "unknown".to_string());
        match store.load_snapshot(*year) {
            Ok(snapshot) => println!(
                "  {year}: {} laws, fetched {} ({size})",
                snapshot.laws.len(),
                short_date(&snapshot.fetched_at),
            ),
            Err(e) => println!("  {year}: unreadable ({e})"),
        }
    }

    let mut any_report = false;
    for year in &years {
        if !store.report_path(*year).exists() {
            continue;
        }
        if !any_report {
            println!("Reports:");
            any_report = true;
        }
        match store.load_report(*year) {
            Ok(doc) => println!(
                "  {year}: {} matches, {} of {} baseline laws unmatched ({} mode, {})",
                doc.statistics.total_matches,
                doc.statistics.unmatched_baselines,
                doc.statistics.baseline_total,
                doc.metadata.mode,
                short_date(&doc.metadata.generated_at),
            ),
            Err(e) => println!("  {year}: unreadable ({e})"),
        }
    }
    if !any_report {
        println!("Reports: none");
        println!("  Run `gazette match` to compare a snapshot against the baseline");
    }

    Ok(())
}

/// Leading YYYY-MM-DD of an RFC 3339 timestamp.
fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
