//! Narrative memory for historical campaign summaries.
//!
//! Past summaries accumulate in an append-only log so later runs can
//! cite them as historical context. Retrieval goes through one of
//! three backends chosen at construction; the log itself is always
//! maintained locally, whichever backend is active.

use brief_core::errors::BriefResult;
use brief_core::models::MemoryRecord;
use brief_core::traits::IMemoryStore;
use brief_embeddings::SemanticIndex;
use tracing::debug;

/// Retrieval backend for [`NarrativeMemory`].
///
/// Exactly one per instance. `External` delegates queries to a
/// pluggable store, `Semantic` ranks by embedding similarity,
/// `Keyword` is the zero-dependency substring fallback.
pub enum MemoryBackend {
    External(Box<dyn IMemoryStore>),
    Semantic(SemanticIndex),
    Keyword,
}

/// Append-only store of campaign summaries with pluggable retrieval.
pub struct NarrativeMemory {
    backend: MemoryBackend,
    log: Vec<MemoryRecord>,
    /// Semantic slot number -> log position.
    indexed: Vec<usize>,
}

impl NarrativeMemory {
    /// Memory with the keyword fallback backend.
    pub fn keyword() -> Self {
        Self::with_backend(MemoryBackend::Keyword)
    }

    /// Memory ranked by vector similarity.
    pub fn semantic(index: SemanticIndex) -> Self {
        Self::with_backend(MemoryBackend::Semantic(index))
    }

    /// Memory that delegates queries to an external store.
    pub fn external(store: Box<dyn IMemoryStore>) -> Self {
        Self::with_backend(MemoryBackend::External(store))
    }

    pub fn with_backend(backend: MemoryBackend) -> Self {
        Self {
            backend,
            log: Vec::new(),
            indexed: Vec::new(),
        }
    }

    /// Append a summary record.
    ///
    /// The record lands in the local log first; backend side effects
    /// (external `add`, embedding + indexing) run after, so a backend
    /// failure propagates without losing the record locally.
    pub fn add_summary(&mut self, record: MemoryRecord) -> BriefResult<()> {
        self.log.push(record);
        let position = self.log.len() - 1;
        match &mut self.backend {
            MemoryBackend::External(store) => store.add(&self.log[position])?,
            MemoryBackend::Semantic(index) => {
                index.index_text(&self.log[position].summary)?;
                self.indexed.push(position);
            }
            MemoryBackend::Keyword => {}
        }
        debug!(
            business_id = %self.log[position].business_id,
            entries = self.log.len(),
            "summary recorded"
        );
        Ok(())
    }

    /// Convenience wrapper: record a bare narrative string.
    pub fn add_narrative(&mut self, business_id: &str, narrative: &str) -> BriefResult<()> {
        self.add_summary(MemoryRecord::new(business_id, narrative))
    }

    /// Retrieve up to `top_k` records relevant to `query`.
    ///
    /// Semantic backend: rank every indexed summary, keep the global
    /// `top_k`, then drop other businesses. Keyword backend:
    /// newest-first case-insensitive substring scan over summary and
    /// campaign, first `top_k` hits kept in recency order. External
    /// backend: fully delegated.
    pub fn retrieve_relevant_context(
        &self,
        query: &str,
        business_id: Option<&str>,
        top_k: usize,
    ) -> BriefResult<Vec<MemoryRecord>> {
        match &self.backend {
            MemoryBackend::External(store) => store.query(query, business_id, top_k),
            MemoryBackend::Semantic(index) => {
                let hits = index.search(query, top_k)?;
                let mut out = Vec::new();
                for (slot, _score) in hits {
                    let record = &self.log[self.indexed[slot]];
                    if let Some(wanted) = business_id {
                        if record.business_id != wanted {
                            continue;
                        }
                    }
                    out.push(record.clone());
                }
                Ok(out)
            }
            MemoryBackend::Keyword => Ok(self.keyword_scan(query, business_id, top_k)),
        }
    }

    fn keyword_scan(
        &self,
        query: &str,
        business_id: Option<&str>,
        top_k: usize,
    ) -> Vec<MemoryRecord> {
        let needle = query.to_lowercase();
        let mut out = Vec::new();
        for record in self.log.iter().rev() {
            if let Some(wanted) = business_id {
                if record.business_id != wanted {
                    continue;
                }
            }
            let in_summary = record.summary.to_lowercase().contains(&needle);
            let in_campaign = record
                .campaign
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle));
            if in_summary || in_campaign {
                out.push(record.clone());
            }
            if out.len() >= top_k {
                break;
            }
        }
        out
    }

    /// Most recently recorded summary for a business, `""` if none.
    ///
    /// Reads the local log in every variant, including `External`.
    pub fn get_narrative(&self, business_id: &str) -> &str {
        self.log
            .iter()
            .rev()
            .find(|record| record.business_id == business_id)
            .map(|record| record.summary.as_str())
            .unwrap_or("")
    }

    /// Number of recorded summaries.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
