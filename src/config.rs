use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};

/// Central configuration loaded from environment variables.
///
/// The OC key comes from the environment (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// law.go.kr OC key (LAW_API_OC) — the ID registered at open.law.go.kr.
    /// Only needed for `fetch`; matching and reporting work offline.
    pub api_oc: String,
    /// Registry endpoint (defaults to https://www.law.go.kr).
    pub api_url: String,
    /// Where snapshots, the baseline, and reports live.
    pub data_dir: PathBuf,
    /// Year used when --year is not passed (GAZETTE_YEAR, defaults to
    /// the current year).
    pub default_year: i32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the OC key, which is only
    /// required for operations that talk to the registry.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("GAZETTE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::store::default_data_dir());

        let default_year = match env::var("GAZETTE_YEAR") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("GAZETTE_YEAR is not a year: {raw:?}"))?,
            Err(_) => Local::now().year(),
        };

        Ok(Self {
            api_oc: env::var("LAW_API_OC").unwrap_or_default(),
            api_url: env::var("LAW_API_URL")
                .unwrap_or_else(|_| crate::lawgo::client::DEFAULT_API_URL.to_string()),
            data_dir,
            default_year,
        })
    }

    /// Check that the OC key is configured.
    /// Call this before any operation that fetches from the registry.
    pub fn require_api(&self) -> Result<()> {
        if self.api_oc.is_empty() {
            anyhow::bail!(
                "LAW_API_OC not set. Add it to your .env file.\n\
                 Register at open.law.go.kr and use the ID part of your\n\
                 account email (before the @) as the OC value."
            );
        }
        Ok(())
    }

    /// The year to operate on, preferring an explicit CLI value.
    pub fn year_or_default(&self, year: Option<i32>) -> i32 {
        year.unwrap_or(self.default_year)
    }
}
