//! Context assembly for the prompt layer.

use brief_core::config::defaults::DEFAULT_TOP_K;
use brief_core::errors::BriefResult;
use brief_core::models::{ContextBundle, MemoryRecord};

use crate::narrative::NarrativeMemory;
use crate::retrieval::RetrievalEngine;

/// Bundles the narrative and retrieved history for a query.
///
/// Pure composition over borrowed memory and retrieval; exists so the
/// prompt layer never talks to either store directly.
pub struct ContextBuilder<'a> {
    memory: &'a NarrativeMemory,
    engine: &'a RetrievalEngine<MemoryRecord>,
    top_k: usize,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(memory: &'a NarrativeMemory, engine: &'a RetrievalEngine<MemoryRecord>) -> Self {
        Self {
            memory,
            engine,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the number of records retrieved per query.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Assemble the context for one summary run.
    ///
    /// The narrative is the most recent summary for `business_id`
    /// (empty when no business is given). Fallible only because the
    /// retrieval tier may embed the query.
    pub fn build_context(
        &self,
        user_query: &str,
        business_id: Option<&str>,
    ) -> BriefResult<ContextBundle> {
        let narrative = business_id
            .map(|id| self.memory.get_narrative(id))
            .unwrap_or("")
            .to_string();
        let retrieved = self.engine.retrieve(user_query, business_id, self.top_k)?;
        Ok(ContextBundle {
            narrative,
            retrieved,
            user_query: user_query.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_narrative_and_retrieved_records() {
        let mut memory = NarrativeMemory::keyword();
        memory.add_narrative("alpha", "latest alpha recap").unwrap();

        let mut engine = RetrievalEngine::keyword();
        engine
            .add_data(MemoryRecord::new("alpha", "webinar drove pipeline"))
            .unwrap();

        let builder = ContextBuilder::new(&memory, &engine);
        let bundle = builder.build_context("webinar", Some("alpha")).unwrap();

        assert_eq!(bundle.narrative, "latest alpha recap");
        assert_eq!(bundle.retrieved.len(), 1);
        assert_eq!(bundle.user_query, "webinar");
    }

    #[test]
    fn missing_business_leaves_narrative_empty() {
        let memory = NarrativeMemory::keyword();
        let engine = RetrievalEngine::keyword();

        let builder = ContextBuilder::new(&memory, &engine);
        let bundle = builder.build_context("anything", None).unwrap();

        assert_eq!(bundle.narrative, "");
        assert!(bundle.retrieved.is_empty());
    }

    #[test]
    fn top_k_override_caps_retrieval() {
        let memory = NarrativeMemory::keyword();
        let mut engine = RetrievalEngine::keyword();
        for i in 0..4 {
            engine
                .add_data(MemoryRecord::new("alpha", format!("recap {i}")))
                .unwrap();
        }

        let builder = ContextBuilder::new(&memory, &engine).with_top_k(1);
        let bundle = builder.build_context("recap", None).unwrap();
        assert_eq!(bundle.retrieved.len(), 1);
    }
}
