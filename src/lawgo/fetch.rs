// Year fetch — walk the registry month by month.
//
// A whole-year query returns thousands of rows and the DRF API paginates
// at 100, so the year is fetched as twelve month windows. Within a window
// the first page reveals the total; the remaining pages are prefetched
// concurrently, every request gated through the rate limiter.
//
// Records are deduplicated on (title, effective date): the same revision
// shows up in adjacent windows and under multiple list targets. A failed
// month is logged and skipped — a partial snapshot beats no snapshot.

use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::client::{LawGoClient, PAGE_SIZE};
use super::rate_limit::RateLimiter;
use super::schema::{LawSearchPage, RawStatute};
use crate::models::StatuteRecord;

/// Trailing pages kept in flight per month window.
const PAGE_PREFETCH: usize = 4;

/// Fetch every statute taking effect in `year`, deduplicated and sorted
/// by effective date.
pub async fn fetch_year(
    client: &LawGoClient,
    limiter: &RateLimiter,
    year: i32,
) -> Result<Vec<StatuteRecord>> {
    let pb = ProgressBar::new(12);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Fetching [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );

    let mut records: Vec<StatuteRecord> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut skipped = 0usize;

    for month in 1..=12 {
        pb.set_message(format!("{year}-{month:02}"));

        match fetch_month(client, limiter, year, month).await {
            Ok(rows) => {
                for record in rows {
                    if record.title.is_empty() || record.id.is_empty() {
                        skipped += 1;
                        continue;
                    }
                    let key = (record.title.clone(), record.effective_date.clone());
                    if seen.insert(key) {
                        records.push(record);
                    }
                }
            }
            Err(e) => {
                warn!(year = year, month = month, error = %e, "Month window failed, continuing");
            }
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    if skipped > 0 {
        warn!(count = skipped, "Dropped registry rows missing a title or law ID");
    }

    records.sort_by(|a, b| {
        a.effective_date
            .cmp(&b.effective_date)
            .then_with(|| a.id.cmp(&b.id))
    });

    info!(year = year, laws = records.len(), "Registry fetch complete");

    Ok(records)
}

/// Fetch all pages of one month window.
async fn fetch_month(
    client: &LawGoClient,
    limiter: &RateLimiter,
    year: i32,
    month: u32,
) -> Result<Vec<StatuteRecord>> {
    let (from, to) = month_window(year, month)?;

    limiter.acquire().await;
    let first = client.search_effective(&from, &to, 1).await?;

    let total = first.total_count;
    let mut rows = first.laws;

    // totalCnt can disagree with the page contents; a short first page
    // settles it.
    if rows.len() < PAGE_SIZE as usize || total <= PAGE_SIZE {
        debug!(year, month, rows = rows.len(), "Single-page month window");
        return Ok(convert(rows));
    }

    let last_page = total.div_ceil(PAGE_SIZE);
    let extra: Vec<Result<LawSearchPage>> = stream::iter(2..=last_page)
        .map(|page| {
            let from = from.as_str();
            let to = to.as_str();
            async move {
                limiter.acquire().await;
                client.search_effective(from, to, page).await
            }
        })
        .buffered(PAGE_PREFETCH)
        .collect()
        .await;

    for page in extra {
        match page {
            Ok(page) => rows.extend(page.laws),
            Err(e) => warn!(year, month, error = %e, "Page fetch failed, continuing"),
        }
    }

    Ok(convert(rows))
}

fn convert(rows: Vec<RawStatute>) -> Vec<StatuteRecord> {
    rows.into_iter().map(RawStatute::into_record).collect()
}

/// First and last day of the month as YYYYMMDD strings.
fn month_window(year: i32, month: u32) -> Result<(String, String)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month window: {year}-{month:02}"))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow::anyhow!("Invalid month window: {year}-{month:02}"))?;
    let last = next.pred_opt().unwrap_or(first);

    Ok((
        first.format("%Y%m%d").to_string(),
        last.format("%Y%m%d").to_string(),
    ))
}
