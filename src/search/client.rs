use futures::future::BoxFuture;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::sync::Arc;
use url::Url;
use crate::config_err;
use crate::error::NicotubeError;
use crate::model::{SearchApiConfig, SearchOutcome, SearchResponse};
use crate::search::SearchBackend;
use crate::utils::debug_if_enabled;

use super::errors::{create_fetch_error, create_parse_error, create_read_error, search_api_error};

pub const SEARCH_TARGETS: &str = "title";
pub const SEARCH_FIELDS: &str = "contentId,title,viewCounter,thumbnailUrl";
pub const SEARCH_SORT: &str = "-viewCounter";

/// Client for the niconico snapshot search api.
pub struct SnapshotClient {
    client: Arc<reqwest::Client>,
    api_config: SearchApiConfig,
    // Pre-computed headers to avoid recreating them each time
    headers: HeaderMap,
}

impl SnapshotClient {
    pub fn new(client: Arc<reqwest::Client>, api_config: SearchApiConfig) -> Result<Self, NicotubeError> {
        // fail early on a broken url instead of per query
        Url::parse(&api_config.url).map_err(|e| config_err!("invalid search url {}: {e}", api_config.url))?;
        Ok(Self {
            client,
            api_config,
            headers: Self::create_headers(),
        })
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    pub fn build_search_url(&self, query: &str) -> Result<Url, NicotubeError> {
        let mut url = Url::parse(&self.api_config.url)
            .map_err(|e| config_err!("invalid search url {}: {e}", self.api_config.url))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("targets", SEARCH_TARGETS)
            .append_pair("fields", SEARCH_FIELDS)
            .append_pair("_sort", SEARCH_SORT)
            .append_pair("_limit", &self.api_config.limit.to_string())
            .append_pair("_context", &self.api_config.context);
        Ok(url)
    }

    /// One remote lookup. Non-success status, transport and body errors are returned as errors.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, NicotubeError> {
        let url = self.build_search_url(query)?;
        debug_if_enabled!("Searching snapshot api: {}", url.as_str());

        let response = self.client
            .get(url.clone())
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| create_fetch_error(url.as_str(), &e))?;

        let status = response.status();
        if !status.is_success() {
            // error answers usually carry a json envelope with the reason in meta
            let body = response.text().await.unwrap_or_default();
            let meta = serde_json::from_str::<SearchResponse>(&body).map(|r| r.meta).unwrap_or_default();
            return Err(search_api_error(status, query, &meta));
        }

        let response_text = response
            .text()
            .await
            .map_err(|error: reqwest::Error| create_read_error(&error))?;

        let search_response: SearchResponse = serde_json::from_str(&response_text)
            .map_err(|error: serde_json::Error| create_parse_error(&error))?;

        if let Some(total) = search_response.meta.total_count {
            debug!("Snapshot api reports {total} matches for '{query}'");
        }
        let outcome = SearchOutcome::from(search_response);
        if !outcome.is_empty() {
            info!("Fetched {} results for '{query}'", outcome.len());
        }
        Ok(outcome)
    }
}

impl SearchBackend for SnapshotClient {
    fn lookup<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchOutcome, NicotubeError>> {
        Box::pin(self.search(query))
    }
}
