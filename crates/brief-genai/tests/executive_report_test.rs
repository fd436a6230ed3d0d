//! Full executive-report path: normalize, detect insights, render.

use brief_context::{ContextBuilder, NarrativeMemory, RetrievalEngine};
use brief_core::config::InsightConfig;
use brief_core::metrics::RawMetrics;
use brief_core::models::{ContextBundle, InsightKind, MemoryRecord};
use brief_genai::prompt::templates::render_executive_prompt;
use brief_genai::{InsightEngine, MetricHistory};
use brief_semantic::MetricNormalizer;

#[test]
fn struggling_campaign_report_surfaces_anomalies_and_risks() {
    // Alias spellings on purpose; the normalizer resolves them.
    let mut raw = RawMetrics::new();
    raw.insert("Click Through Rate", 2.0);
    raw.insert("conversion rate", 0.5);
    raw.insert("roas", 5.0);
    let metrics = MetricNormalizer::default().normalize(&raw);

    let history = MetricHistory::from_config(&InsightConfig::default());
    let insights = InsightEngine::new(InsightConfig::default()).detect(&metrics, &history);

    // CTR and Conversion Rate sit far below their benchmarks, ROAS is
    // high, and Conversion Rate is under the floor.
    let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InsightKind::Anomaly,
            InsightKind::Anomaly,
            InsightKind::HighRoas,
            InsightKind::Risk,
        ]
    );

    let mut memory = NarrativeMemory::keyword();
    memory
        .add_narrative("biz1", "Q2 outperformed Q1 on every acquisition metric.")
        .unwrap();
    let engine: RetrievalEngine<MemoryRecord> = RetrievalEngine::keyword();
    let bundle = ContextBuilder::new(&memory, &engine)
        .build_context("", Some("biz1"))
        .unwrap();

    let report = render_executive_prompt(&metrics, &bundle, &history.benchmarks, &insights);

    assert!(report.starts_with(
        "Executive Overview:\nQ2 outperformed Q1 on every acquisition metric."
    ));
    assert!(report.contains("- CTR: 2 (Benchmark: 2.5) | Δ: -0.50"));
    assert!(report.contains("- Conversion Rate: 0.5 (Benchmark: 7) | Δ: -6.50"));
    assert!(report.contains("- ROAS: 5 (Benchmark: 4) | Δ: +1.00"));
    assert!(report.contains(
        "Strategic Insights:\n- CTR: CTR down 20.0% vs benchmark\n\
         - Conversion Rate: Conversion Rate down 92.9% vs benchmark"
    ));
    assert!(report.contains("Risks:\n- Conversion Rate below 1%"));
    // High ROAS is informational and stays out of both report sections.
    assert!(!report.contains("high return on ad spend"));
    assert!(report.ends_with("Recommendations:\nNo recommendations available."));
}

#[test]
fn healthy_campaign_report_renders_clean_sections() {
    let mut raw = RawMetrics::new();
    raw.insert("ctr", 3.0);
    raw.insert("Conversion Rate", 8.0);
    let metrics = MetricNormalizer::default().normalize(&raw);

    let history = MetricHistory::from_config(&InsightConfig::default());
    let insights = InsightEngine::new(InsightConfig::default()).detect(&metrics, &history);
    assert!(insights.is_empty());

    let bundle = ContextBundle {
        narrative: String::new(),
        retrieved: Vec::new(),
        user_query: String::new(),
    };
    let report = render_executive_prompt(&metrics, &bundle, &history.benchmarks, &insights);

    assert!(report.contains("Executive Overview:\nNo executive overview available."));
    assert!(report.contains("- CTR: 3 (Benchmark: 2.5) | Δ: +0.50"));
    assert!(report.contains("- Conversion Rate: 8 (Benchmark: 7) | Δ: +1.00"));
    assert!(report.contains("Strategic Insights:\n- No significant anomalies detected."));
    assert!(report.contains("Risks:\nNo major risks identified."));
}
