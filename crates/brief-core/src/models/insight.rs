use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which detection rule produced an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Anomaly,
    TrendAcceleration,
    HighRoas,
    Risk,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Anomaly => "anomaly",
            Self::TrendAcceleration => "trend_acceleration",
            Self::HighRoas => "high_roas",
            Self::Risk => "risk",
        };
        write!(f, "{s}")
    }
}

/// Severity ordering: `Info < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// A detected performance insight. Transient: computed per invocation,
/// surfaced in structured output, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
    /// The metric that triggered the rule, when one did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi: Option<String>,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, serde_json::Value>,
}
