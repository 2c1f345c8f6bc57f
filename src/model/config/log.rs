use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

// Only the log section is read before the logger is up, everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogLevelConfig {
    #[serde(default)]
    pub log: Option<LogConfig>,
}
