use serde::{Deserialize, Serialize};

use super::defaults;

/// Prompt composition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// System message for the operational prompt.
    pub system_role: String,
    /// Voice used by the executive template.
    pub tone: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system_role: defaults::DEFAULT_SYSTEM_ROLE.to_string(),
            tone: defaults::DEFAULT_PROMPT_TONE.to_string(),
        }
    }
}
