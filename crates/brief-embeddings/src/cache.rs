//! In-memory embedding cache.
//!
//! Repeated summaries and queries embed identical text; caching by
//! content hash saves the duplicate provider calls.

use std::time::Duration;

use moka::sync::Cache;

/// Embedding cache keyed by blake3 text hashes.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .time_to_live(Duration::from_secs(86400))
            .build();

        Self { cache }
    }

    /// Cache key for a text: its blake3 hash in hex.
    pub fn key_for(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, vector: Vec<f32>) {
        self.cache.insert(key, vector);
    }

    /// Number of entries currently cached. moka updates this lazily,
    /// so treat it as an estimate.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get_round_trip() {
        let cache = EmbeddingCache::new(100);
        let key = EmbeddingCache::key_for("q1 summary");
        cache.insert(key.clone(), vec![0.5, 0.5]);
        assert_eq!(cache.get(&key), Some(vec![0.5, 0.5]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = EmbeddingCache::new(100);
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn key_is_stable_per_text() {
        assert_eq!(EmbeddingCache::key_for("same"), EmbeddingCache::key_for("same"));
        assert_ne!(EmbeddingCache::key_for("same"), EmbeddingCache::key_for("other"));
    }

    #[test]
    fn clear_empties_cache() {
        let cache = EmbeddingCache::new(100);
        cache.insert("a".into(), vec![1.0]);
        cache.clear();
        assert_eq!(cache.get("a"), None);
    }
}
