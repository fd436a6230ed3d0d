//! Rule-based insight detection.
//!
//! Four fixed rules over the normalized metrics: benchmark anomalies,
//! trend acceleration, high ROAS, and conversion-rate risk. Thresholds
//! come from `InsightConfig`. Non-numeric values never fire a rule and
//! never error.

use std::collections::BTreeMap;

use brief_core::config::InsightConfig;
use brief_core::metrics::NormalizedMetrics;
use brief_core::models::{Insight, InsightKind, Severity};
use tracing::debug;

/// Comparison inputs for the detection rules, keyed by output metric
/// name. Benchmarks drive the anomaly rule; last-period values drive
/// trend acceleration and the declining-conversion rule.
#[derive(Debug, Clone, Default)]
pub struct MetricHistory {
    pub benchmarks: BTreeMap<String, f64>,
    pub last_period: BTreeMap<String, f64>,
}

impl MetricHistory {
    /// History seeded with the configured benchmark table and no
    /// last-period data.
    pub fn from_config(config: &InsightConfig) -> Self {
        Self {
            benchmarks: config.benchmarks.clone(),
            last_period: BTreeMap::new(),
        }
    }
}

/// Detects notable metric movements.
pub struct InsightEngine {
    config: InsightConfig,
}

impl InsightEngine {
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Run every rule and collect the insights, grouped by rule in a
    /// fixed order: anomalies, accelerations, high ROAS, risks.
    pub fn detect(&self, metrics: &NormalizedMetrics, history: &MetricHistory) -> Vec<Insight> {
        let mut insights = Vec::new();

        // Rule 1: value fell more than `anomaly_drop` below its benchmark.
        for (name, metric) in metrics.iter() {
            let Some(value) = metric.value.as_number() else {
                continue;
            };
            let Some(&benchmark) = history.benchmarks.get(name) else {
                continue;
            };
            if benchmark == 0.0 {
                continue;
            }
            let pct_change = (value - benchmark) / benchmark;
            if pct_change < -self.config.anomaly_drop {
                insights.push(Insight {
                    kind: InsightKind::Anomaly,
                    message: format!(
                        "{name} down {:.1}% vs benchmark",
                        pct_change.abs() * 100.0
                    ),
                    kpi: Some(name.to_string()),
                    severity: Severity::Warning,
                    details: details(&[
                        ("current", value),
                        ("benchmark", benchmark),
                        ("pct_change", pct_change),
                    ]),
                });
            }
        }

        // Rule 2: value rose more than `acceleration_rise` over last period.
        for (name, metric) in metrics.iter() {
            let Some(value) = metric.value.as_number() else {
                continue;
            };
            let Some(&last) = history.last_period.get(name) else {
                continue;
            };
            if last == 0.0 {
                continue;
            }
            let pct_change = (value - last) / last;
            if pct_change > self.config.acceleration_rise {
                insights.push(Insight {
                    kind: InsightKind::TrendAcceleration,
                    message: format!(
                        "{name} accelerated by {:.1}% vs last period",
                        pct_change * 100.0
                    ),
                    kpi: Some(name.to_string()),
                    severity: Severity::Info,
                    details: details(&[
                        ("current", value),
                        ("last_period", last),
                        ("pct_change", pct_change),
                    ]),
                });
            }
        }

        // Rule 3: ROAS above the high-return threshold.
        if let Some(value) = metrics.get("ROAS").and_then(|m| m.value.as_number()) {
            if value > self.config.high_roas {
                insights.push(Insight {
                    kind: InsightKind::HighRoas,
                    message: format!(
                        "ROAS exceeds {}: high return on ad spend",
                        self.config.high_roas
                    ),
                    kpi: Some("ROAS".to_string()),
                    severity: Severity::Info,
                    details: details(&[("roas", value)]),
                });
            }
        }

        // Rule 4: conversion rate below the floor, or declining.
        if let Some(value) = metrics
            .get("Conversion Rate")
            .and_then(|m| m.value.as_number())
        {
            if value < self.config.conversion_floor {
                insights.push(Insight {
                    kind: InsightKind::Risk,
                    message: format!("Conversion Rate below {}%", self.config.conversion_floor),
                    kpi: Some("Conversion Rate".to_string()),
                    severity: Severity::Critical,
                    details: details(&[("conversion_rate", value)]),
                });
            }
            if let Some(&last) = history.last_period.get("Conversion Rate") {
                if value < last {
                    insights.push(Insight {
                        kind: InsightKind::Risk,
                        message: "Conversion Rate declining vs last period".to_string(),
                        kpi: Some("Conversion Rate".to_string()),
                        severity: Severity::Warning,
                        details: details(&[("current", value), ("last_period", last)]),
                    });
                }
            }
        }

        debug!(count = insights.len(), "insight detection complete");
        insights
    }
}

fn details(entries: &[(&str, f64)]) -> BTreeMap<String, serde_json::Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
        .collect()
}
