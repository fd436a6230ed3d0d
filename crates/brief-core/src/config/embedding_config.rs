use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "api" or "lexical".
    pub provider: String,
    /// Bearer credential for the API provider. Comes from the config
    /// file or from `BRIEF_EMBEDDING_API_KEY` via
    /// [`super::BriefConfig::apply_env`].
    pub api_key: Option<String>,
    /// Root of an OpenAI-compatible API.
    pub base_url: String,
    /// Embedding model identifier.
    pub model: String,
    /// Expected vector dimensionality. Provider responses are checked
    /// against this and rejected on mismatch.
    pub dimensions: usize,
    /// In-memory embedding cache max entries.
    pub cache_size: u64,
    /// Client-side request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            api_key: None,
            base_url: defaults::DEFAULT_EMBEDDING_BASE_URL.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}
