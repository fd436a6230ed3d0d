use tracing::debug;

use brief_core::metrics::{
    MarketingMetric, MetricCategory, MetricUnit, MetricValue, NormalizedMetric, NormalizedMetrics,
    RawMetrics,
};

use crate::ontology::MetricOntology;

/// Maps raw metric names to canonical definitions, validates value
/// ranges, and tags business categories.
#[derive(Debug, Clone, Default)]
pub struct MetricNormalizer {
    ontology: MetricOntology,
}

impl MetricNormalizer {
    pub fn new(ontology: MetricOntology) -> Self {
        Self { ontology }
    }

    pub fn ontology(&self) -> &MetricOntology {
        &self.ontology
    }

    /// Normalize a raw metric map.
    ///
    /// Pure and infallible: identical input yields identical output.
    /// Resolved metrics come back under their canonical names with
    /// their definition attached; unknown metrics keep their raw names,
    /// stay valid as long as the value is numeric, and carry the
    /// `Unknown metric` error otherwise.
    pub fn normalize(&self, raw: &RawMetrics) -> NormalizedMetrics {
        let mut result = NormalizedMetrics::new();
        for (raw_name, value) in raw.iter() {
            match self.ontology.get_metric(raw_name) {
                Ok(metric) => {
                    result.insert(
                        metric.name.clone(),
                        NormalizedMetric {
                            value: value.clone(),
                            valid: validate_range(metric, value),
                            category: category_for(&metric.name),
                            metadata: Some(metric.clone()),
                            error: None,
                        },
                    );
                }
                Err(_) => {
                    let valid = value.is_numeric();
                    result.insert(
                        raw_name,
                        NormalizedMetric {
                            value: value.clone(),
                            valid,
                            category: MetricCategory::Other,
                            metadata: None,
                            error: (!valid).then(|| "Unknown metric".to_string()),
                        },
                    );
                }
            }
        }
        debug!(total = result.len(), "normalized raw metrics");
        result
    }
}

/// Business category for a canonical metric name.
pub fn category_for(canonical_name: &str) -> MetricCategory {
    match canonical_name.to_lowercase().as_str() {
        "cac" | "ctr" | "conversion rate" => MetricCategory::Acquisition,
        "ltv" | "roas" => MetricCategory::Revenue,
        _ => MetricCategory::Other,
    }
}

/// Range validation.
///
/// Ratio-style metrics and percent units validate inside [0, 100];
/// this branch wins even when the unit says `ratio`, so ROAS shares
/// the percent range. Dollar and plain-ratio units must be
/// non-negative. Unitless metrics only need a numeric value.
pub fn validate_range(metric: &MarketingMetric, value: &MetricValue) -> bool {
    let Some(v) = value.as_number() else {
        return false;
    };
    if metric.is_ratio || metric.unit == Some(MetricUnit::Percent) {
        return (0.0..=100.0).contains(&v);
    }
    match metric.unit {
        Some(MetricUnit::Dollars) | Some(MetricUnit::Ratio) => v >= 0.0,
        Some(MetricUnit::Percent) | None => true,
    }
}
