use serde::{Deserialize, Serialize};

use super::defaults;

/// Chat model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Bearer credential. Comes from the config file or from
    /// `BRIEF_API_KEY` via [`super::BriefConfig::apply_env`].
    pub api_key: Option<String>,
    /// Root of an OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier sent with each completion request.
    pub model: String,
    /// Upper bound on generated tokens per summary.
    pub max_tokens: u32,
    /// Client-side request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::DEFAULT_MODEL_BASE_URL.to_string(),
            model: defaults::DEFAULT_MODEL_NAME.to_string(),
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}
