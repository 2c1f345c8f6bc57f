use log::debug;
use std::time::Duration;
use tokio::time::sleep;
use crate::model::PageConfig;
use crate::page::PageTitleSource;

#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub attempts: u32,
    pub interval: Duration,
}

impl From<&PageConfig> for PollConfig {
    fn from(config: &PageConfig) -> Self {
        Self {
            attempts: config.poll_attempts,
            interval: config.poll_interval(),
        }
    }
}

/// Asks the source until it has a title, at most `attempts` times.
pub async fn wait_for_title<S>(source: &S, poll: &PollConfig) -> Option<String>
where
    S: PageTitleSource + ?Sized,
{
    let attempts = poll.attempts.max(1);
    for attempt in 1..=attempts {
        if let Some(title) = source.get_page_title() {
            return Some(title);
        }
        if attempt < attempts {
            debug!("No page title yet, attempt {attempt}/{attempts}");
            sleep(poll.interval).await;
        }
    }
    debug!("Gave up waiting for page title after {attempts} attempts");
    None
}
