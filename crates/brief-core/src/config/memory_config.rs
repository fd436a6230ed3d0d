use serde::{Deserialize, Serialize};

use super::defaults;

/// Narrative memory and retrieval configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Context backend selected at wiring time: "keyword" or
    /// "semantic". External stores are wired in code, not by config.
    pub backend: String,
    /// Default number of records retrieval returns.
    pub top_k: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_MEMORY_BACKEND.to_string(),
            top_k: defaults::DEFAULT_TOP_K,
        }
    }
}
