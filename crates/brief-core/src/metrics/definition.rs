use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit attached to a canonical metric definition.
///
/// Serialized with the wire spellings of the original ingestion schema
/// (`"$"`, `"%"`, `"ratio"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    #[serde(rename = "$")]
    Dollars,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "ratio")]
    Ratio,
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Dollars => "$",
            Self::Percent => "%",
            Self::Ratio => "ratio",
        };
        write!(f, "{s}")
    }
}

/// Canonical definition of one marketing metric.
///
/// Immutable once registered in an ontology. `name` is the canonical
/// key; `aliases` are the alternate spellings resolution accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingMetric {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,
    /// Ratio-style metrics validate against the percent range even when
    /// their unit says otherwise.
    #[serde(default)]
    pub is_ratio: bool,
}

impl MarketingMetric {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            formula: None,
            aliases: Vec::new(),
            unit: None,
            is_ratio: false,
        }
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_unit(mut self, unit: MetricUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn ratio(mut self) -> Self {
        self.is_ratio = true;
        self
    }
}
