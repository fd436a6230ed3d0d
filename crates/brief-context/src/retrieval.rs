//! Generic two-tier retrieval engine.
//!
//! The general RAG substrate under the context layer: any record type
//! that exposes its searchable text can be stored and retrieved, with
//! either vector similarity or a newest-first keyword scan.

use brief_core::errors::BriefResult;
use brief_core::models::MemoryRecord;
use brief_embeddings::SemanticIndex;
use tracing::debug;

/// A record the retrieval engine can store and search.
pub trait Retrievable {
    /// Owning business, used for result filtering.
    fn business_id(&self) -> &str;

    /// Fields scanned by the keyword tier.
    fn search_text(&self) -> Vec<&str>;

    /// Text embedded by the vector tier.
    fn index_text(&self) -> &str;
}

impl Retrievable for MemoryRecord {
    fn business_id(&self) -> &str {
        &self.business_id
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.summary.as_str()];
        if let Some(campaign) = &self.campaign {
            fields.push(campaign.as_str());
        }
        fields
    }

    fn index_text(&self) -> &str {
        &self.summary
    }
}

enum Tier {
    Keyword,
    Semantic {
        index: SemanticIndex,
        /// Slot number -> position in `records`.
        slots: Vec<usize>,
    },
}

/// Stores records and retrieves the ones relevant to a query.
///
/// The tier is fixed at construction. `semantic` ranks by embedding
/// similarity; `keyword` scans newest-first for a case-insensitive
/// substring match over the record's search fields.
pub struct RetrievalEngine<R> {
    records: Vec<R>,
    tier: Tier,
}

impl<R: Retrievable + Clone> RetrievalEngine<R> {
    /// Engine with the keyword fallback tier. Never fails.
    pub fn keyword() -> Self {
        Self {
            records: Vec::new(),
            tier: Tier::Keyword,
        }
    }

    /// Engine backed by vector similarity over `index_text`.
    pub fn semantic(index: SemanticIndex) -> Self {
        Self {
            records: Vec::new(),
            tier: Tier::Semantic {
                index,
                slots: Vec::new(),
            },
        }
    }

    /// Add a record. The vector tier also embeds and indexes its
    /// `index_text`; an embedding failure propagates but the record
    /// stays stored, so the keyword-visible log never loses data.
    pub fn add_data(&mut self, record: R) -> BriefResult<()> {
        self.records.push(record);
        if let Tier::Semantic { index, slots } = &mut self.tier {
            let position = self.records.len() - 1;
            let text = self.records[position].index_text().to_string();
            let slot = index.index_text(&text)?;
            slots.push(position);
            debug_assert_eq!(slot, slots.len() - 1);
        }
        Ok(())
    }

    /// Retrieve up to `top_k` records relevant to `query`.
    ///
    /// Vector tier: rank every indexed record, keep the global
    /// `top_k`, then drop records from other businesses. The business
    /// filter runs after truncation, so a filtered call may return
    /// fewer than `top_k` even when more matches exist.
    ///
    /// Keyword tier: newest-first scan, case-insensitive substring
    /// match, first `top_k` hits kept in recency order.
    pub fn retrieve(
        &self,
        query: &str,
        business_id: Option<&str>,
        top_k: usize,
    ) -> BriefResult<Vec<R>> {
        let results = match &self.tier {
            Tier::Semantic { index, slots } => {
                let hits = index.search(query, top_k)?;
                let mut out = Vec::new();
                for (slot, _score) in hits {
                    let record = &self.records[slots[slot]];
                    if let Some(wanted) = business_id {
                        if record.business_id() != wanted {
                            continue;
                        }
                    }
                    out.push(record.clone());
                }
                out
            }
            Tier::Keyword => self.keyword_scan(query, business_id, top_k),
        };
        debug!(
            query,
            business_id = business_id.unwrap_or("*"),
            hits = results.len(),
            "retrieval complete"
        );
        Ok(results)
    }

    fn keyword_scan(&self, query: &str, business_id: Option<&str>, top_k: usize) -> Vec<R> {
        let needle = query.to_lowercase();
        let mut out = Vec::new();
        for record in self.records.iter().rev() {
            if let Some(wanted) = business_id {
                if record.business_id() != wanted {
                    continue;
                }
            }
            let hit = record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if hit {
                out.push(record.clone());
            }
            if out.len() >= top_k {
                break;
            }
        }
        out
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
