use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::MetricValue;

/// The fixed headline slots rendered at the top of every prompt, in
/// this declaration order. Serialized under their rendered labels so
/// the wire format matches the original ingestion schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadlineMetric {
    #[serde(rename = "Number of attendees")]
    Attendees,
    #[serde(rename = "Pipeline")]
    Pipeline,
    #[serde(rename = "Number of opportunities")]
    Opportunities,
}

impl HeadlineMetric {
    pub const ALL: [HeadlineMetric; 3] = [Self::Attendees, Self::Pipeline, Self::Opportunities];

    /// The exact label used as the output key and in prompt lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attendees => "Number of attendees",
            Self::Pipeline => "Pipeline",
            Self::Opportunities => "Number of opportunities",
        }
    }

    /// Reverse lookup from a rendered label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }
}

/// Raw metrics destined for normalization.
///
/// Headline counts live in fixed enumerated slots; everything else goes
/// into an open-ended, insertion-ordered map. Iteration yields headline
/// entries first (slot order), then the extras in insertion order,
/// which fixes the normalizer's output order without relying on
/// conventional key strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    #[serde(default)]
    headline: BTreeMap<HeadlineMetric, MetricValue>,
    #[serde(default, flatten)]
    extra: IndexMap<String, MetricValue>,
}

impl RawMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a headline slot, replacing any previous value.
    pub fn set_headline(&mut self, slot: HeadlineMetric, value: impl Into<MetricValue>) {
        self.headline.insert(slot, value.into());
    }

    /// Add a non-headline metric under its raw name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<MetricValue>) {
        self.extra.insert(name.into(), value.into());
    }

    pub fn headline(&self, slot: HeadlineMetric) -> Option<&MetricValue> {
        self.headline.get(&slot)
    }

    pub fn len(&self) -> usize {
        self.headline.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headline.is_empty() && self.extra.is_empty()
    }

    /// Headline entries first (slot order), then extras in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.headline
            .iter()
            .map(|(slot, value)| (slot.label(), value))
            .chain(self.extra.iter().map(|(name, value)| (name.as_str(), value)))
    }
}
