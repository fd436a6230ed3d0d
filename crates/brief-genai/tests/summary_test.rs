//! End-to-end summary pipeline tests with a stubbed chat model.

use std::sync::{Arc, Mutex};

use brief_context::{NarrativeMemory, RetrievalEngine};
use brief_core::config::{BriefConfig, EmbeddingConfig};
use brief_core::errors::{BriefResult, EmbeddingError, ModelError};
use brief_core::models::MemoryRecord;
use brief_core::traits::{IChatModel, IEmbedder};
use brief_embeddings::SemanticIndex;
use brief_genai::{PromptBuilder, SummaryGenerator, SummaryRequest, SUMMARY_ERROR};
use brief_semantic::MetricNormalizer;
use chrono::{TimeZone, Utc};
use test_fixtures::{dataset_with, sample_dataset, Dataset};

/// Chat stub that records every prompt it receives.
struct StubModel {
    captured: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl IChatModel for StubModel {
    fn complete(&self, system: &str, user: &str) -> BriefResult<String> {
        self.captured
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        if self.fail {
            Err(ModelError::RequestFailed {
                reason: "connection refused".to_string(),
            }
            .into())
        } else {
            Ok("  A strong quarter overall.\n".to_string())
        }
    }
}

fn generator_with_stub(fail: bool) -> (SummaryGenerator, Arc<Mutex<Vec<(String, String)>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let model = StubModel {
        captured: Arc::clone(&captured),
        fail,
    };
    let generator = SummaryGenerator::new(
        MetricNormalizer::default(),
        PromptBuilder::new(),
        Box::new(model),
        NarrativeMemory::keyword(),
        RetrievalEngine::keyword(),
    );
    (generator, captured)
}

fn request(data: &Dataset) -> SummaryRequest<'_> {
    SummaryRequest {
        campaigns: &data.campaigns,
        attendees: &data.attendees,
        responses: &data.responses,
        activities: &data.activities,
        contacts: &data.contacts,
        accounts: &data.accounts,
        opportunities: &data.opportunities,
        program_name: Some("Q2 Product Launch"),
        user_prompt: Some("Keep it under two paragraphs."),
        business_id: Some("biz1"),
    }
}

#[test]
fn standard_dataset_renders_the_headline_lines_first() {
    let data = sample_dataset();
    let (generator, captured) = generator_with_stub(false);

    let summary = generator.generate_summary(&request(&data)).unwrap();
    assert_eq!(summary, "A strong quarter overall.");

    let calls = captured.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (system, user) = &calls[0];
    assert_eq!(system, "You are a helpful marketing analyst.");

    let lines: Vec<&str> = user.lines().collect();
    assert_eq!(lines[0], "Number of attendees: 40");
    assert_eq!(lines[1], "Pipeline: 500000");
    assert_eq!(lines[2], "Number of opportunities: 20");
}

#[test]
fn proxy_metrics_reach_the_prompt_under_canonical_names() {
    let data = sample_dataset();
    let (generator, captured) = generator_with_stub(false);
    generator.generate_summary(&request(&data)).unwrap();

    let calls = captured.lock().unwrap();
    let user = &calls[0].1;
    // 500k pipeline, 20 opportunities, 40 attendees, 60 activities.
    assert!(user.contains("- CAC: 25000 (acquisition)"));
    assert!(user.contains("- LTV: 12500 (revenue)"));
    assert!(user.contains("- ROAS: 500000 (revenue)"));
    assert!(user.contains("- CTR: 150 (acquisition)"));
    assert!(user.contains("- Conversion Rate: 50 (acquisition)"));
    assert!(user.contains("Strategic Tags: other, acquisition, revenue"));
}

#[test]
fn contacts_and_accounts_are_injected_into_instructions() {
    let data = sample_dataset();
    let (generator, captured) = generator_with_stub(false);
    generator.generate_summary(&request(&data)).unwrap();

    let calls = captured.lock().unwrap();
    let user = &calls[0].1;
    assert!(user.contains("User Instructions:\nKeep it under two paragraphs."));
    // First three attendees share identity with the contact list.
    assert!(user.contains(
        "Key Contacts:\nDana Whitfield (dana.whitfield@acme.example)\nMarcus Lee (marcus.lee@globex.example)\nPriya Nair (priya.nair@initech.example)"
    ));
    assert!(user.contains("Notable Accounts: Acme Corp, Globex, Initech, Northwind Traders"));
}

#[test]
fn seeded_history_appears_as_historical_comparisons() {
    let data = dataset_with(4, 2, 80_000.0);
    let (mut generator, captured) = generator_with_stub(false);
    generator
        .retriever_mut()
        .add_data(
            MemoryRecord::new("biz1", "Last launch drove record pipeline.")
                .with_campaign("Q1 Product Launch")
                .with_timestamp(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()),
        )
        .unwrap();

    // The keyword scan matches the query against the campaign field.
    let mut req = request(&data);
    req.program_name = Some("Product Launch");
    generator.generate_summary(&req).unwrap();

    let calls = captured.lock().unwrap();
    let user = &calls[0].1;
    assert!(user.contains(
        "Historical Comparisons:\n- Q1 Product Launch (2026-02-01): Last launch drove record pipeline."
    ));
}

#[test]
fn chat_failure_returns_the_sentinel_not_an_error() {
    let data = sample_dataset();
    let (generator, _captured) = generator_with_stub(true);

    let summary = generator.generate_summary(&request(&data)).unwrap();
    assert_eq!(summary, SUMMARY_ERROR);
    assert!(summary.starts_with("[ERROR]"));
}

#[test]
fn empty_dataset_still_produces_a_summary() {
    let data = dataset_with(0, 0, 0.0);
    let (generator, captured) = generator_with_stub(false);

    let summary = generator.generate_summary(&request(&data)).unwrap();
    assert_eq!(summary, "A strong quarter overall.");

    let calls = captured.lock().unwrap();
    let user = &calls[0].1;
    // No attendees: zeroed proxies, no acquisition-cost line.
    assert!(user.contains("Number of attendees: 0"));
    assert!(user.contains("- LTV: 0 (revenue)"));
    assert!(!user.contains("CAC"));
}

// ── embedding failures are not chat failures ──

struct FailingEmbedder;

impl IEmbedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> BriefResult<Vec<f32>> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: "stub".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[test]
fn embedding_failure_during_retrieval_propagates_as_err() {
    let data = sample_dataset();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let generator = SummaryGenerator::new(
        MetricNormalizer::default(),
        PromptBuilder::new(),
        Box::new(StubModel {
            captured: Arc::clone(&captured),
            fail: false,
        }),
        NarrativeMemory::keyword(),
        RetrievalEngine::semantic(SemanticIndex::new(Box::new(FailingEmbedder), 10)),
    );

    let result = generator.generate_summary(&request(&data));
    assert!(result.is_err());
    // The model was never reached.
    assert!(captured.lock().unwrap().is_empty());
}

// ── configuration wiring ──

#[test]
fn from_config_requires_a_model_credential() {
    let config = BriefConfig::default();
    assert!(SummaryGenerator::from_config(&config).is_err());
}

#[test]
fn from_config_builds_keyword_and_lexical_backends() {
    let mut config = BriefConfig::default();
    config.model.api_key = Some("test-key".to_string());
    assert!(SummaryGenerator::from_config(&config).is_ok());

    config.memory.backend = "semantic".to_string();
    config.embedding = EmbeddingConfig {
        provider: "lexical".to_string(),
        dimensions: 64,
        ..Default::default()
    };
    assert!(SummaryGenerator::from_config(&config).is_ok());
}
