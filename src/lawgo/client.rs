// law.go.kr DRF client — plain HTTP with an OC key query parameter.
//
// The Open API needs no auth header; the OC (organization code) issued at
// open.law.go.kr rides along in the query string. Responses are JSON when
// type=JSON is requested, but auth failures still come back as HTML error
// pages with a 200 status, so the body is sniffed before parsing.

use anyhow::{Context, Result};
use tracing::debug;

use super::schema::{LawSearchPage, LawSearchResponse};

/// Default endpoint for the national law information center.
pub const DEFAULT_API_URL: &str = "https://www.law.go.kr";

/// Rows per page — the DRF API caps `display` at 100.
pub const PAGE_SIZE: u32 = 100;

/// Thin reqwest wrapper around the `lawSearch.do` endpoint.
pub struct LawGoClient {
    client: reqwest::Client,
    base_url: String,
    oc: String,
}

impl LawGoClient {
    /// Create a client for the given base URL and OC key.
    ///
    /// Defaults to `https://www.law.go.kr` — pass a different URL for
    /// testing against a local stub.
    pub fn new(base_url: &str, oc: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("gazette/0.1 (statute-tracking)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            oc: oc.to_string(),
        })
    }

    /// List statutes taking effect in the given window (inclusive on both
    /// ends, YYYYMMDD). Pages are 1-based, `PAGE_SIZE` rows each.
    pub async fn search_effective(&self, from: &str, to: &str, page: u32) -> Result<LawSearchPage> {
        let url = format!("{}/DRF/lawSearch.do", self.base_url);
        let window = format!("{from}~{to}");
        let display = PAGE_SIZE.to_string();
        let page_param = page.to_string();

        debug!(window = %window, page = page, "lawSearch.do request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("OC", self.oc.as_str()),
                ("target", "eflaw"),
                ("type", "JSON"),
                ("efYd", window.as_str()),
                ("display", display.as_str()),
                ("page", page_param.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("lawSearch.do request failed ({window} page {page})"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("lawSearch.do returned {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read lawSearch.do response body")?;

        // The API ignores type=JSON on auth errors and serves an HTML page
        if body.trim_start().starts_with('<') {
            anyhow::bail!(
                "law.go.kr returned HTML instead of JSON — the OC key is likely \
                 invalid or not registered for the list API. Check LAW_API_OC."
            );
        }

        let parsed: LawSearchResponse = serde_json::from_str(&body).with_context(|| {
            format!("Failed to parse lawSearch.do response ({window} page {page})")
        })?;

        Ok(parsed.into_page())
    }
}
