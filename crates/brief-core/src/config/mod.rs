pub mod defaults;
pub mod embedding_config;
pub mod insight_config;
pub mod memory_config;
pub mod model_config;
pub mod prompt_config;

pub use embedding_config::EmbeddingConfig;
pub use insight_config::InsightConfig;
pub use memory_config::MemoryConfig;
pub use model_config::ModelConfig;
pub use prompt_config::PromptConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{BriefResult, ConfigError};

/// Root configuration for the summary pipeline.
///
/// Every section and field has a default, so an empty TOML document is
/// a valid config. Credentials never come from the environment
/// implicitly; callers opt in through [`BriefConfig::apply_env`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefConfig {
    pub model: ModelConfig,
    pub embedding: EmbeddingConfig,
    pub memory: MemoryConfig,
    pub prompt: PromptConfig,
    pub insight: InsightConfig,
}

impl BriefConfig {
    /// Parse from TOML text. Missing sections and fields fall back to
    /// defaults.
    pub fn from_toml(text: &str) -> BriefResult<Self> {
        toml::from_str(text).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BriefResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&text)
    }

    /// Overlay credentials from the environment. This is the only
    /// place the pipeline reads environment variables, and only when
    /// the caller invokes it.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(defaults::ENV_MODEL_API_KEY) {
            if !key.is_empty() {
                self.model.api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var(defaults::ENV_EMBEDDING_API_KEY) {
            if !key.is_empty() {
                self.embedding.api_key = Some(key);
            }
        }
    }

    /// Startup validation. Fails fast before any pipeline work;
    /// credentials are required only for the providers this config
    /// actually selects.
    pub fn validate(&self) -> BriefResult<()> {
        if self.model.api_key.as_deref().unwrap_or("").is_empty() {
            return Err(ConfigError::MissingCredential {
                name: "model.api_key".to_string(),
            }
            .into());
        }
        if self.model.max_tokens == 0 {
            return Err(invalid("model.max_tokens", "must be positive"));
        }
        if self.model.timeout_secs == 0 {
            return Err(invalid("model.timeout_secs", "must be positive"));
        }
        match self.memory.backend.as_str() {
            "keyword" | "semantic" => {}
            other => {
                return Err(invalid(
                    "memory.backend",
                    &format!("unsupported backend: {other}"),
                ))
            }
        }
        if self.memory.top_k == 0 {
            return Err(invalid("memory.top_k", "must be positive"));
        }
        match self.embedding.provider.as_str() {
            "api" | "lexical" => {}
            other => {
                return Err(invalid(
                    "embedding.provider",
                    &format!("unsupported provider: {other}"),
                ))
            }
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be positive"));
        }
        if self.memory.backend == "semantic"
            && self.embedding.provider == "api"
            && self.embedding.api_key.as_deref().unwrap_or("").is_empty()
        {
            return Err(ConfigError::MissingCredential {
                name: "embedding.api_key".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::BriefError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
