use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw metric value as supplied by the ingestion layer.
///
/// Untagged on the wire: JSON numbers deserialize to `Number`, strings
/// to `Text`. Numeric coercion of text values happens in
/// [`MetricValue::as_number`], not at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Coerce to a number. Text values parse after trimming; anything
    /// unparseable is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

/// Prompt rendering contract: integral finite numbers render without a
/// fractional part (`500000.0` renders as `500000`), everything else in
/// the shortest form the standard formatter produces.
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<usize> for MetricValue {
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
