use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Literal tokens removed from titles in addition to the built-in vocabulary.
    #[serde(default)]
    pub extra_noise_tokens: Vec<String>,
}

impl NormalizerConfig {
    pub fn prepare(&mut self) {
        self.extra_noise_tokens = self.extra_noise_tokens.iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect();
    }
}
