// JSON document store — registry snapshots, the baseline, match reports.
//
// Documents are plain pretty-printed JSON files in the data directory:
//
//   baseline.json        the company's applied-law list (hand-maintained)
//   laws_<year>.json     one registry snapshot per year
//   matches_<year>.json  the latest match report for that year
//
// Keeping them as files means the baseline can be edited by hand and the
// reports diffed or committed alongside compliance records.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::matching::matcher::MatchMode;
use crate::models::{BaselineEntry, BaselineMatches, MatchReport, StatuteRecord};
use crate::stats::MatchStatistics;

/// Default data directory: the platform data dir, or a local `.gazette`
/// folder when the platform offers none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("gazette"))
        .unwrap_or_else(|| PathBuf::from(".gazette"))
}

/// A registry snapshot document.
#[derive(Debug, Serialize, Deserialize)]
pub struct LawSnapshot {
    pub year: i32,
    pub fetched_at: String,
    pub total_laws: usize,
    pub laws: Vec<StatuteRecord>,
}

impl LawSnapshot {
    pub fn new(year: i32, laws: Vec<StatuteRecord>) -> Self {
        Self {
            year,
            fetched_at: Utc::now().to_rfc3339(),
            total_laws: laws.len(),
            laws,
        }
    }
}

/// The baseline document. Only `items` matters; extra keys in the file
/// (descriptions, revision notes) are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BaselineList {
    #[serde(default)]
    pub items: Vec<BaselineEntry>,
}

/// A persisted match report: run metadata, statistics, and both halves
/// of the baseline accounting.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportDocument {
    pub metadata: ReportMetadata,
    pub statistics: MatchStatistics,
    pub matches: Vec<BaselineMatches>,
    pub unmatched: Vec<BaselineEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub year: i32,
    /// "exact" or "fuzzy"
    pub mode: String,
    /// Retention threshold; absent for exact runs.
    pub threshold: Option<f64>,
}

impl ReportDocument {
    pub fn new(
        year: i32,
        mode: MatchMode,
        report: MatchReport,
        statistics: MatchStatistics,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now().to_rfc3339(),
                year,
                mode: mode.as_str().to_string(),
                threshold: mode.threshold(),
            },
            statistics,
            matches: report.matches,
            unmatched: report.unmatched,
        }
    }

    /// Rebuild the in-memory report view for display.
    pub fn report(&self) -> MatchReport {
        MatchReport {
            matches: self.matches.clone(),
            unmatched: self.unmatched.clone(),
        }
    }
}

/// File-backed document store rooted at the data directory.
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open the store, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn baseline_path(&self) -> PathBuf {
        self.root.join("baseline.json")
    }

    pub fn snapshot_path(&self, year: i32) -> PathBuf {
        self.root.join(format!("laws_{year}.json"))
    }

    pub fn report_path(&self, year: i32) -> PathBuf {
        self.root.join(format!("matches_{year}.json"))
    }

    pub fn load_baseline(&self) -> Result<BaselineList> {
        let path = self.baseline_path();
        if !path.exists() {
            anyhow::bail!(
                "No baseline at {}.\n\
                 Run `gazette init`, then fill baseline.json with your applied laws:\n\
                 {{\"items\": [{{\"id\": \"LAW-001\", \"title\": \"산업안전보건법\", \"categories\": [\"안전보건\"]}}]}}",
                path.display()
            );
        }
        read_json(&path)
    }

    /// Write an empty baseline if none exists. Returns true when created.
    pub fn ensure_baseline(&self) -> Result<bool> {
        let path = self.baseline_path();
        if path.exists() {
            return Ok(false);
        }
        write_json(&path, &BaselineList::default())?;
        Ok(true)
    }

    pub fn save_snapshot(&self, snapshot: &LawSnapshot) -> Result<()> {
        let path = self.snapshot_path(snapshot.year);
        write_json(&path, snapshot)?;
        info!(path = %path.display(), laws = snapshot.laws.len(), "Snapshot saved");
        Ok(())
    }

    pub fn load_snapshot(&self, year: i32) -> Result<LawSnapshot> {
        let path = self.snapshot_path(year);
        if !path.exists() {
            anyhow::bail!(
                "No registry snapshot for {year} at {}.\n\
                 Run `gazette fetch --year {year}` first.",
                path.display()
            );
        }
        read_json(&path)
    }

    pub fn save_report(&self, document: &ReportDocument) -> Result<()> {
        let path = self.report_path(document.metadata.year);
        write_json(&path, document)?;
        info!(path = %path.display(), "Report saved");
        Ok(())
    }

    pub fn load_report(&self, year: i32) -> Result<ReportDocument> {
        let path = self.report_path(year);
        if !path.exists() {
            anyhow::bail!(
                "No match report for {year} at {}.\n\
                 Run `gazette match --year {year}` first.",
                path.display()
            );
        }
        read_json(&path)
    }

    /// Years with a snapshot on disk, ascending.
    pub fn snapshot_years(&self) -> Result<Vec<i32>> {
        let mut years = Vec::new();
        for entry in fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read {}", self.root.display()))?
        {
            let name = entry?.file_name();
            if let Some(year) = name.to_str().and_then(parse_snapshot_year) {
                years.push(year);
            }
        }
        years.sort_unstable();
        Ok(years)
    }
}

fn parse_snapshot_year(name: &str) -> Option<i32> {
    name.strip_prefix("laws_")?
        .strip_suffix(".json")?
        .parse()
        .ok()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&body).with_context(|| format!("Malformed JSON in {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value).context("Failed to serialize document")?;
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
