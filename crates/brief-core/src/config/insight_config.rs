use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Insight detection thresholds plus the comparison tables the rules
/// and the executive template read. Table keys are canonical metric
/// names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Fractional drop versus benchmark that flags an anomaly.
    pub anomaly_drop: f64,
    /// Fractional rise versus last period that flags acceleration.
    pub acceleration_rise: f64,
    /// ROAS value above which the high-return insight fires.
    pub high_roas: f64,
    /// Conversion-rate percentage below which the risk insight fires.
    pub conversion_floor: f64,
    /// Strategic targets per metric.
    pub benchmarks: BTreeMap<String, f64>,
    /// Industry baseline values per metric.
    pub baselines: BTreeMap<String, f64>,
    /// Alerting thresholds per metric.
    pub thresholds: BTreeMap<String, f64>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            anomaly_drop: defaults::DEFAULT_ANOMALY_DROP,
            acceleration_rise: defaults::DEFAULT_ACCELERATION_RISE,
            high_roas: defaults::DEFAULT_HIGH_ROAS,
            conversion_floor: defaults::DEFAULT_CONVERSION_FLOOR,
            benchmarks: default_benchmarks(),
            baselines: default_baselines(),
            thresholds: default_thresholds(),
        }
    }
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Strategic targets the executive template compares against.
pub fn default_benchmarks() -> BTreeMap<String, f64> {
    table(&[
        ("CTR", 2.5),
        ("ROAS", 4.0),
        ("Conversion Rate", 7.0),
        ("CAC", 120.0),
    ])
}

/// Industry baselines for context in reporting.
pub fn default_baselines() -> BTreeMap<String, f64> {
    table(&[
        ("CTR", 1.8),
        ("ROAS", 2.5),
        ("Conversion Rate", 4.0),
        ("CAC", 200.0),
    ])
}

/// Alerting thresholds.
pub fn default_thresholds() -> BTreeMap<String, f64> {
    table(&[
        ("CTR", 2.0),
        ("ROAS", 3.0),
        ("Conversion Rate", 5.0),
        ("CAC", 150.0),
    ])
}
