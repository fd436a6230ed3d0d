//! SemanticIndex, the main entry point for brief-embeddings.
//!
//! Coordinates provider selection, the embedding cache, and the vector
//! index behind a single interface. Callers index summaries by slot and
//! search with free-text queries.

use brief_core::config::EmbeddingConfig;
use brief_core::errors::{BriefResult, ConfigError};
use brief_core::traits::IEmbedder;
use tracing::{debug, info};

use crate::cache::EmbeddingCache;
use crate::index::VectorIndex;
use crate::providers::{ApiEmbedder, LexicalEmbedder};

/// Embedding service coupling a provider with a cache and vector index.
///
/// Indexed texts receive sequential slot numbers; `search` returns
/// `(slot, similarity)` pairs ranked best-first. The caller owns the
/// mapping from slots back to its own records.
pub struct SemanticIndex {
    embedder: Box<dyn IEmbedder>,
    cache: EmbeddingCache,
    index: VectorIndex,
}

// Manual impl: `Box<dyn IEmbedder>` rules out `#[derive(Debug)]`.
impl std::fmt::Debug for SemanticIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticIndex").finish_non_exhaustive()
    }
}

impl SemanticIndex {
    /// Create an index around an existing provider.
    pub fn new(embedder: Box<dyn IEmbedder>, cache_size: u64) -> Self {
        let index = VectorIndex::new(embedder.dimensions());
        info!(
            provider = embedder.name(),
            dims = embedder.dimensions(),
            "semantic index initialized"
        );
        Self {
            embedder,
            cache: EmbeddingCache::new(cache_size),
            index,
        }
    }

    /// Create an index from configuration, selecting the provider by name.
    pub fn from_config(config: &EmbeddingConfig) -> BriefResult<Self> {
        let embedder: Box<dyn IEmbedder> = match config.provider.as_str() {
            "api" => Box::new(ApiEmbedder::new(config)?),
            "lexical" => Box::new(LexicalEmbedder::new(config.dimensions)),
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "embedding.provider".to_string(),
                    reason: format!("unknown provider '{other}', expected 'api' or 'lexical'"),
                }
                .into())
            }
        };
        Ok(Self::new(embedder, config.cache_size))
    }

    /// Embed text, consulting the cache before the provider.
    pub fn embed_cached(&self, text: &str) -> BriefResult<Vec<f32>> {
        let key = EmbeddingCache::key_for(text);
        if let Some(vector) = self.cache.get(&key) {
            debug!(key = %key, "embedding cache hit");
            return Ok(vector);
        }
        let vector = self.embedder.embed(text)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    /// Embed `text` and append it to the index. Returns the slot number.
    pub fn index_text(&mut self, text: &str) -> BriefResult<usize> {
        let vector = self.embed_cached(text)?;
        self.index.add(vector)
    }

    /// Rank all indexed slots against `query`, best-first, truncated to
    /// `top_k`.
    pub fn search(&self, query: &str, top_k: usize) -> BriefResult<Vec<(usize, f32)>> {
        let vector = self.embed_cached(query)?;
        self.index.search(&vector, top_k)
    }

    /// Number of indexed texts.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.embedder.dimensions()
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &str {
        self.embedder.name()
    }
}
