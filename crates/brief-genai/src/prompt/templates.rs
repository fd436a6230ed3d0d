//! Deterministic board-style prompt template.
//!
//! A stricter alternative to the default prompt: five fixed sections
//! with benchmark deltas and explicit data-quality markers. Unlike the
//! default prompt, validity IS surfaced here, as a
//! `[Check: Unusual Value]` marker on the KPI line.

use std::collections::BTreeMap;

use brief_core::metrics::NormalizedMetrics;
use brief_core::models::{ContextBundle, Insight, InsightKind};

/// Render the five-section executive prompt.
///
/// Sections: Executive Overview, KPI Performance vs Benchmarks,
/// Strategic Insights, Risks, Recommendations. Every section renders a
/// fixed fallback line when its data is absent, so the output shape is
/// stable.
pub fn render_executive_prompt(
    metrics: &NormalizedMetrics,
    bundle: &ContextBundle,
    benchmarks: &BTreeMap<String, f64>,
    insights: &[Insight],
) -> String {
    let overview = if bundle.narrative.is_empty() {
        "No executive overview available."
    } else {
        bundle.narrative.as_str()
    };

    let mut kpi_lines = Vec::new();
    for (name, metric) in metrics.iter() {
        let mut line = format!("- {}: {}", name, metric.value);
        if let Some(bench) = benchmarks.get(name) {
            line.push_str(&format!(" (Benchmark: {bench})"));
            if let Some(value) = metric.value.as_number() {
                line.push_str(&format!(" | Δ: {:+.2}", value - bench));
            }
        }
        if !metric.valid {
            line.push_str(" [Check: Unusual Value]");
        }
        kpi_lines.push(line);
    }
    let kpi_section = if kpi_lines.is_empty() {
        "No KPI data available.".to_string()
    } else {
        kpi_lines.join("\n")
    };

    let anomaly_lines: Vec<String> = insights
        .iter()
        .filter(|i| i.kind == InsightKind::Anomaly)
        .map(|i| match &i.kpi {
            Some(kpi) => format!("- {}: {}", kpi, i.message),
            None => format!("- {}", i.message),
        })
        .collect();
    let insights_section = if anomaly_lines.is_empty() {
        "- No significant anomalies detected.".to_string()
    } else {
        anomaly_lines.join("\n")
    };

    let risk_lines: Vec<String> = insights
        .iter()
        .filter(|i| i.kind == InsightKind::Risk)
        .map(|i| format!("- {}", i.message))
        .collect();
    let risks = if risk_lines.is_empty() {
        "No major risks identified.".to_string()
    } else {
        risk_lines.join("\n")
    };

    let recommendations = "No recommendations available.";

    format!(
        "Executive Overview:\n{overview}\n\n\
         KPI Performance vs Benchmarks:\n{kpi_section}\n\n\
         Strategic Insights:\n{insights_section}\n\n\
         Risks:\n{risks}\n\n\
         Recommendations:\n{recommendations}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_core::metrics::{MetricCategory, MetricValue, NormalizedMetric};
    use brief_core::models::Severity;

    fn bundle_with(narrative: &str) -> ContextBundle {
        ContextBundle {
            narrative: narrative.to_string(),
            retrieved: Vec::new(),
            user_query: String::new(),
        }
    }

    fn one_metric(name: &str, value: f64, valid: bool) -> NormalizedMetrics {
        let mut metrics = NormalizedMetrics::new();
        metrics.insert(
            name,
            NormalizedMetric {
                value: MetricValue::from(value),
                valid,
                category: MetricCategory::Acquisition,
                metadata: None,
                error: None,
            },
        );
        metrics
    }

    #[test]
    fn empty_inputs_render_every_fallback_line() {
        let out = render_executive_prompt(
            &NormalizedMetrics::new(),
            &bundle_with(""),
            &BTreeMap::new(),
            &[],
        );
        assert!(out.starts_with("Executive Overview:\nNo executive overview available."));
        assert!(out.contains("No KPI data available."));
        assert!(out.contains("- No significant anomalies detected."));
        assert!(out.contains("No major risks identified."));
        assert!(out.ends_with("No recommendations available."));
    }

    #[test]
    fn kpi_line_carries_benchmark_and_signed_delta() {
        let mut benchmarks = BTreeMap::new();
        benchmarks.insert("CTR".to_string(), 2.5);

        let out = render_executive_prompt(
            &one_metric("CTR", 2.0, true),
            &bundle_with("Strong quarter."),
            &benchmarks,
            &[],
        );
        assert!(out.contains("- CTR: 2 (Benchmark: 2.5) | Δ: -0.50"));
    }

    #[test]
    fn invalid_value_gets_the_check_marker() {
        let out = render_executive_prompt(
            &one_metric("CTR", 250.0, false),
            &bundle_with(""),
            &BTreeMap::new(),
            &[],
        );
        assert!(out.contains("- CTR: 250 [Check: Unusual Value]"));
    }

    #[test]
    fn anomaly_and_risk_insights_fill_their_sections() {
        let insights = vec![
            Insight {
                kind: InsightKind::Anomaly,
                message: "CTR down 20.0% vs benchmark".to_string(),
                kpi: Some("CTR".to_string()),
                severity: Severity::Warning,
                details: BTreeMap::new(),
            },
            Insight {
                kind: InsightKind::Risk,
                message: "Conversion Rate below 1%".to_string(),
                kpi: Some("Conversion Rate".to_string()),
                severity: Severity::Critical,
                details: BTreeMap::new(),
            },
        ];
        let out = render_executive_prompt(
            &NormalizedMetrics::new(),
            &bundle_with(""),
            &BTreeMap::new(),
            &insights,
        );
        assert!(out.contains("Strategic Insights:\n- CTR: CTR down 20.0% vs benchmark"));
        assert!(out.contains("Risks:\n- Conversion Rate below 1%"));
    }
}
