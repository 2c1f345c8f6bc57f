use serde::{Deserialize, Serialize};
use crate::error::NicotubeError;
use crate::model::{LogConfig, NormalizerConfig, PageConfig, SearchApiConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchApiConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
}

impl AppConfig {
    pub fn prepare(&mut self) -> Result<(), NicotubeError> {
        self.search.prepare()?;
        self.normalizer.prepare();
        self.page.prepare();
        Ok(())
    }
}
