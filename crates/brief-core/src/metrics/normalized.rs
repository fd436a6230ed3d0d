use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::definition::MarketingMetric;
use super::value::MetricValue;

/// Semantic bucket a normalized metric falls into. The display strings
/// double as strategic tags in prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    Acquisition,
    Revenue,
    Other,
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Acquisition => "acquisition",
            Self::Revenue => "revenue",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// One metric after normalization.
///
/// `valid` and `error` surface only in structured output; the prompt
/// builder renders value and category but never validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMetric {
    pub value: MetricValue,
    pub valid: bool,
    pub category: MetricCategory,
    /// Canonical definition when resolution succeeded, `None` for
    /// unknown metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MarketingMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Normalizer output: insertion-ordered map from output key (canonical
/// name when resolved, original raw name otherwise) to the normalized
/// metric. Iteration order is the prompt rendering order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedMetrics(IndexMap<String, NormalizedMetric>);

impl NormalizedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, metric: NormalizedMetric) {
        self.0.insert(name.into(), metric);
    }

    pub fn get(&self, name: &str) -> Option<&NormalizedMetric> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NormalizedMetric)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Distinct category labels present, in first-appearance order.
    /// These become the strategic tags of the prompt.
    pub fn strategic_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for metric in self.0.values() {
            let label = metric.category.to_string();
            if !tags.contains(&label) {
                tags.push(label);
            }
        }
        tags
    }
}

impl<'a> IntoIterator for &'a NormalizedMetrics {
    type Item = (&'a String, &'a NormalizedMetric);
    type IntoIter = indexmap::map::Iter<'a, String, NormalizedMetric>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, NormalizedMetric)> for NormalizedMetrics {
    fn from_iter<T: IntoIterator<Item = (String, NormalizedMetric)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
