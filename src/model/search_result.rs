use serde::{Deserialize, Serialize};
use crate::utils::default_on_null;

pub const MAX_OUTCOME_SIZE: usize = 5;
pub const NICO_WATCH_URL: &str = "https://www.nicovideo.jp/watch";

/// One video record as delivered by the snapshot search api.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "contentId")]
    pub id: String,
    #[serde(default, deserialize_with = "default_on_null")]
    pub title: String,
    #[serde(rename = "viewCounter", default, deserialize_with = "default_on_null")]
    pub view_count: u64,
    #[serde(rename = "thumbnailUrl", default, deserialize_with = "default_on_null")]
    pub thumbnail_url: String,
}

impl SearchResult {
    pub fn watch_url(&self) -> String {
        format!("{NICO_WATCH_URL}/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponseMeta {
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
}

// Response envelope, `data` is missing on some error answers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meta: SearchResponseMeta,
    #[serde(default)]
    pub data: Option<Vec<SearchResult>>,
}

/// Ranked result list, ordered by the server (view count descending) and capped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    results: Vec<SearchResult>,
}

impl SearchOutcome {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(mut results: Vec<SearchResult>) -> Self {
        results.truncate(MAX_OUTCOME_SIZE);
        Self { results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }
}

impl From<SearchResponse> for SearchOutcome {
    fn from(response: SearchResponse) -> Self {
        Self::new(response.data.unwrap_or_default())
    }
}
