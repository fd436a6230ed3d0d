use brief_core::metrics::*;

#[test]
fn metric_builder_fills_all_fields() {
    let metric = MarketingMetric::new("ROAS", "Return on ad spend")
        .with_formula("Revenue / Ad Spend")
        .with_aliases(["return on ad spend", "roas"])
        .with_unit(MetricUnit::Ratio)
        .ratio();

    assert_eq!(metric.name, "ROAS");
    assert_eq!(metric.formula.as_deref(), Some("Revenue / Ad Spend"));
    assert_eq!(metric.aliases.len(), 2);
    assert_eq!(metric.unit, Some(MetricUnit::Ratio));
    assert!(metric.is_ratio);
}

#[test]
fn units_use_wire_spellings() {
    assert_eq!(serde_json::to_string(&MetricUnit::Dollars).unwrap(), "\"$\"");
    assert_eq!(serde_json::to_string(&MetricUnit::Percent).unwrap(), "\"%\"");
    assert_eq!(serde_json::to_string(&MetricUnit::Ratio).unwrap(), "\"ratio\"");

    let unit: MetricUnit = serde_json::from_str("\"%\"").unwrap();
    assert_eq!(unit, MetricUnit::Percent);
}

#[test]
fn normalized_metric_omits_absent_optionals_in_json() {
    let known = NormalizedMetric {
        value: MetricValue::Number(120.0),
        valid: true,
        category: MetricCategory::Acquisition,
        metadata: Some(MarketingMetric::new("CAC", "Cost to acquire a customer")),
        error: None,
    };
    let json = serde_json::to_string(&known).unwrap();
    assert!(json.contains("metadata"));
    assert!(!json.contains("error"));

    let unknown = NormalizedMetric {
        value: MetricValue::Text("n/a".into()),
        valid: false,
        category: MetricCategory::Other,
        metadata: None,
        error: Some("Unknown metric".into()),
    };
    let json = serde_json::to_string(&unknown).unwrap();
    assert!(!json.contains("metadata"));
    assert!(json.contains("Unknown metric"));
}

#[test]
fn raw_metrics_deserialize_with_flattened_extras() {
    let json = r#"{
        "headline": {"Number of attendees": 40, "Pipeline": 500000.0},
        "roas": 4.2,
        "engagement": "high"
    }"#;
    let raw: RawMetrics = serde_json::from_str(json).unwrap();

    assert_eq!(
        raw.headline(HeadlineMetric::Attendees),
        Some(&MetricValue::Number(40.0))
    );
    assert_eq!(raw.headline(HeadlineMetric::Opportunities), None);

    let keys: Vec<&str> = raw.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["Number of attendees", "Pipeline", "roas", "engagement"]);
}

#[test]
fn normalized_metrics_serialize_as_plain_map() {
    let mut metrics = NormalizedMetrics::new();
    metrics.insert(
        "Pipeline",
        NormalizedMetric {
            value: MetricValue::Number(500_000.0),
            valid: true,
            category: MetricCategory::Other,
            metadata: None,
            error: None,
        },
    );
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["Pipeline"]["valid"], true);
    assert_eq!(json["Pipeline"]["category"], "other");
}
