use std::time::Duration;
use crate::model::SearchApiConfig;

const CONNECT_TIMEOUT_SECS: u64 = 5;

pub fn create_client(config: &SearchApiConfig) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(config.timeout_secs.max(1))))
        .timeout(Duration::from_secs(config.timeout_secs.max(1)))
}
