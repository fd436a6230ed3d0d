use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the narrative memory.
///
/// Records are append-only: once stored they are never mutated or
/// deleted for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// The business (account, client) the summary belongs to.
    pub business_id: String,
    /// Narrative summary text. This is also the text a semantic backend
    /// embeds and the primary field keyword search scans.
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl MemoryRecord {
    pub fn new(business_id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            business_id: business_id.into(),
            summary: summary.into(),
            campaign: None,
            timestamp: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
