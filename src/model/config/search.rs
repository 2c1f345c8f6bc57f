use serde::{Deserialize, Serialize};
use url::Url;
use crate::config_err_res;
use crate::error::NicotubeError;
use crate::model::MAX_OUTCOME_SIZE;

pub const SNAPSHOT_API_URL: &str = "https://snapshot.search.nicovideo.jp/api/v2/snapshot/video/contents/search";
pub const SNAPSHOT_API_CONTEXT: &str = "nicotube";
pub const DEFAULT_USER_AGENT: &str = concat!("nicotube/", env!("CARGO_PKG_VERSION"));

fn default_limit() -> usize { MAX_OUTCOME_SIZE }
fn default_timeout_secs() -> u64 { 10 }

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchApiConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub context: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: String,
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        Self {
            url: SNAPSHOT_API_URL.to_string(),
            context: SNAPSHOT_API_CONTEXT.to_string(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearchApiConfig {
    pub fn prepare(&mut self) -> Result<(), NicotubeError> {
        let url = self.url.trim();
        self.url = String::from(if url.is_empty() { SNAPSHOT_API_URL } else { url });
        let context = self.context.trim();
        self.context = String::from(if context.is_empty() { SNAPSHOT_API_CONTEXT } else { context });
        let user_agent = self.user_agent.trim();
        self.user_agent = String::from(if user_agent.is_empty() { DEFAULT_USER_AGENT } else { user_agent });
        self.limit = self.limit.clamp(1, MAX_OUTCOME_SIZE);
        if self.timeout_secs == 0 {
            self.timeout_secs = default_timeout_secs();
        }
        if let Err(err) = Url::parse(&self.url) {
            return config_err_res!("invalid search url {}: {err}", self.url);
        }
        Ok(())
    }
}
