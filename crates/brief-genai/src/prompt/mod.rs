//! Structured prompt construction.
//!
//! Turns normalized metrics, strategic tags, and historical context
//! into a system+user message pair. The rendering below is a byte
//! contract: downstream tests and any caller diffing model inputs
//! depend on the exact ordering and punctuation, so changes here are
//! breaking.

pub mod templates;

use brief_core::config::defaults::DEFAULT_SYSTEM_ROLE;
use brief_core::config::PromptConfig;
use brief_core::metrics::{HeadlineMetric, NormalizedMetrics};
use brief_core::models::MemoryRecord;

/// System and user message pair sent to the chat model.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Builds the summary prompt from the pipeline's intermediate outputs.
pub struct PromptBuilder {
    system_role: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::with_role(DEFAULT_SYSTEM_ROLE)
    }

    /// Builder with a custom system role sentence.
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            system_role: role.into(),
        }
    }

    pub fn from_config(config: &PromptConfig) -> Self {
        Self::with_role(config.system_role.clone())
    }

    /// Compose the system and user messages.
    ///
    /// Rendering order: headline metrics in their fixed slot order,
    /// then the remaining metrics under a `Key Metrics` heading, then
    /// tags, historical comparisons, and user instructions. Validity
    /// is computed upstream but never rendered here; out-of-range
    /// values print like any other. The user message is trimmed.
    pub fn build_prompt(
        &self,
        metrics: &NormalizedMetrics,
        strategic_tags: &[String],
        historical_context: &[MemoryRecord],
        user_instructions: Option<&str>,
    ) -> PromptPair {
        let mut user = String::new();

        for slot in HeadlineMetric::ALL {
            if let Some(metric) = metrics.get(slot.label()) {
                user.push_str(&format!("{}: {}\n", slot.label(), metric.value));
            }
        }

        if !metrics.is_empty() {
            user.push_str("Key Metrics (normalized):\n");
            for (name, metric) in metrics.iter() {
                if HeadlineMetric::from_label(name).is_some() {
                    continue;
                }
                user.push_str(&format!("- {}: {} ({})\n", name, metric.value, metric.category));
            }
        }

        if !strategic_tags.is_empty() {
            user.push_str("\nStrategic Tags: ");
            user.push_str(&strategic_tags.join(", "));
            user.push('\n');
        }

        if !historical_context.is_empty() {
            user.push_str("\nHistorical Comparisons:\n");
            for record in historical_context {
                let campaign = record
                    .campaign
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .unwrap_or("Previous");
                let when = record
                    .timestamp
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "n/a".to_string());
                user.push_str(&format!("- {} ({}): {}\n", campaign, when, record.summary));
            }
        }

        if let Some(instructions) = user_instructions.filter(|s| !s.is_empty()) {
            user.push_str(&format!("\nUser Instructions:\n{instructions}\n"));
        }

        PromptPair {
            system: self.system_role.clone(),
            user: user.trim().to_string(),
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
