//! The retrieval engine is generic over any `Retrievable` record.

use brief_context::{Retrievable, RetrievalEngine};
use brief_embeddings::{LexicalEmbedder, SemanticIndex};

/// A non-summary record type, to exercise the generic seam.
#[derive(Clone)]
struct ExperimentNote {
    business_id: String,
    name: String,
    result: String,
}

impl ExperimentNote {
    fn new(business_id: &str, name: &str, result: &str) -> Self {
        Self {
            business_id: business_id.to_string(),
            name: name.to_string(),
            result: result.to_string(),
        }
    }
}

impl Retrievable for ExperimentNote {
    fn business_id(&self) -> &str {
        &self.business_id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.result]
    }

    fn index_text(&self) -> &str {
        &self.result
    }
}

#[test]
fn keyword_tier_scans_all_search_fields() {
    let mut engine = RetrievalEngine::keyword();
    engine
        .add_data(ExperimentNote::new("b1", "subject line A/B", "variant B lifted opens"))
        .unwrap();
    engine
        .add_data(ExperimentNote::new("b1", "landing page copy", "no measurable change"))
        .unwrap();

    // Matches the name field.
    let hits = engine.retrieve("subject line", None, 5).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "subject line A/B");

    // Matches the result field.
    let hits = engine.retrieve("measurable", None, 5).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "landing page copy");
}

#[test]
fn semantic_tier_embeds_the_index_text() {
    let index = SemanticIndex::new(Box::new(LexicalEmbedder::new(256)), 100);
    let mut engine = RetrievalEngine::semantic(index);
    engine
        .add_data(ExperimentNote::new("b1", "email test", "open rate improved sharply"))
        .unwrap();
    engine
        .add_data(ExperimentNote::new("b1", "pricing test", "churn stayed flat all quarter"))
        .unwrap();

    let hits = engine.retrieve("open rate improvement", None, 1).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "email test");
}

#[test]
fn semantic_tier_filters_by_business_after_ranking() {
    let index = SemanticIndex::new(Box::new(LexicalEmbedder::new(256)), 100);
    let mut engine = RetrievalEngine::semantic(index);
    engine
        .add_data(ExperimentNote::new("b1", "t1", "holiday discount raised conversion"))
        .unwrap();
    engine
        .add_data(ExperimentNote::new("b2", "t2", "holiday discount raised conversion"))
        .unwrap();

    let hits = engine
        .retrieve("holiday discount raised conversion", Some("b2"), 2)
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].business_id, "b2");
}
