use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_poll_attempts() -> u32 { 10 }
fn default_poll_interval_ms() -> u64 { 500 }

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default = "default_poll_attempts")]
    pub poll_attempts: u32,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            poll_attempts: default_poll_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl PageConfig {
    pub fn prepare(&mut self) {
        self.poll_attempts = self.poll_attempts.max(1);
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
