// Wire schema for lawSearch.do responses.
//
// The registry's JSON is converted from XML and irregular: the result
// array hangs off different envelope keys depending on deployment, field
// names arrive in Korean with romanized variants, counts come quoted,
// single-row pages collapse the array into a bare object, and dates are
// bare YYYYMMDD digits. Everything is normalized into StatuteRecord here
// so the rest of the crate never touches wire shapes.

use serde::{Deserialize, Deserializer};

use crate::models::{StatuteRecord, StatuteStatus};

/// Top-level response envelope. Most deployments nest the page under
/// `LawSearch` (or `Search`); some error payloads come flat.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LawSearchResponse {
    Nested {
        #[serde(rename = "LawSearch", alias = "Search")]
        search: LawSearchPage,
    },
    Flat(LawSearchPage),
}

impl LawSearchResponse {
    pub fn into_page(self) -> LawSearchPage {
        match self {
            LawSearchResponse::Nested { search } => search,
            LawSearchResponse::Flat(page) => page,
        }
    }
}

/// One page of search results.
#[derive(Debug, Default, Deserialize)]
pub struct LawSearchPage {
    #[serde(
        rename = "totalCnt",
        default,
        deserialize_with = "count_from_string_or_number"
    )]
    pub total_count: u32,
    #[serde(
        rename = "law",
        alias = "eflaw",
        default,
        deserialize_with = "one_or_many"
    )]
    pub laws: Vec<RawStatute>,
}

/// One row of the result list, exactly as the registry sends it.
#[derive(Debug, Default, Deserialize)]
pub struct RawStatute {
    #[serde(
        rename = "법령ID",
        alias = "lawId",
        alias = "lsId",
        default,
        deserialize_with = "lenient_string"
    )]
    pub law_id: String,
    #[serde(rename = "법령명", alias = "lawName", alias = "lawNm", default)]
    pub title: String,
    #[serde(
        rename = "시행일자",
        alias = "enfDate",
        alias = "efYd",
        alias = "efctDt",
        default,
        deserialize_with = "lenient_string"
    )]
    pub effective_date: String,
    #[serde(
        rename = "공포일자",
        alias = "promDate",
        alias = "promDt",
        default,
        deserialize_with = "lenient_string"
    )]
    pub promulgation_date: String,
    #[serde(rename = "제개정구분", alias = "제개정구분명", default)]
    pub amendment_type: String,
    #[serde(
        rename = "법령구분",
        alias = "법령구분명",
        alias = "lawType",
        default
    )]
    pub law_type: String,
    #[serde(
        rename = "소관부처",
        alias = "소관부처명",
        alias = "department",
        alias = "admstNm",
        default
    )]
    pub ministry: String,
    #[serde(rename = "법령상태", alias = "lawStatus", default)]
    pub status: String,
    #[serde(rename = "현행연혁코드", alias = "historyCode", default)]
    pub history_code: String,
}

impl RawStatute {
    /// Normalize a wire row into the canonical record shape.
    ///
    /// Fields are trimmed, dates converted to ISO, and the status label
    /// resolved from 법령상태 with 현행연혁코드 as the fallback.
    pub fn into_record(self) -> StatuteRecord {
        let status_label = if self.status.trim().is_empty() {
            &self.history_code
        } else {
            &self.status
        };
        let status = StatuteStatus::from_label(status_label);

        StatuteRecord {
            id: self.law_id.trim().to_string(),
            title: self.title.trim().to_string(),
            effective_date: format_date(&self.effective_date),
            promulgation_date: format_date(&self.promulgation_date),
            amendment_type: self.amendment_type.trim().to_string(),
            law_type: self.law_type.trim().to_string(),
            ministry: self.ministry.trim().to_string(),
            status,
            categories: Default::default(),
        }
    }
}

/// YYYYMMDD -> YYYY-MM-DD; anything else passes through trimmed.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() == 8 && raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..8])
    } else {
        raw.to_string()
    }
}

fn count_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        String(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n as u32,
        Raw::String(s) => s.trim().parse().unwrap_or(0),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Number(u64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::String(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<RawStatute>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<RawStatute>),
        One(Box<RawStatute>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Many(rows) => rows,
        Raw::One(row) => vec![*row],
    })
}
