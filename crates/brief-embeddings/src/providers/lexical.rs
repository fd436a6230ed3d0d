//! Deterministic lexical embedder.
//!
//! Hashes unigrams and bigrams into fixed-dimension buckets and
//! weights them by sublinear term frequency. No external dependencies,
//! so it works offline and in tests. Coarser than neural embeddings,
//! but stable: identical text always yields the identical vector.

use std::collections::HashMap;

use brief_core::errors::BriefResult;
use brief_core::traits::IEmbedder;

/// Weight given to bigram buckets relative to unigrams.
const BIGRAM_WEIGHT: f32 = 0.5;

/// Hashed term-frequency embedder.
pub struct LexicalEmbedder {
    dimensions: usize,
}

impl LexicalEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a bucket for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Lowercase alphanumeric terms, single characters dropped.
    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let terms = Self::terms(text);
        let mut out = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return out;
        }

        let mut counts: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            *counts.entry(term.as_str()).or_default() += 1.0;
        }
        for (term, count) in &counts {
            // Sublinear frequency scaling keeps repeated terms from
            // swamping the vector.
            out[Self::bucket(term, self.dimensions)] += 1.0 + count.ln();
        }

        // Bigram buckets add phrase sensitivity.
        for pair in terms.windows(2) {
            let joined = format!("{} {}", pair[0], pair[1]);
            out[Self::bucket(&joined, self.dimensions)] += BIGRAM_WEIGHT;
        }

        let norm: f32 = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut out {
                *v /= norm;
            }
        }
        out
    }
}

impl IEmbedder for LexicalEmbedder {
    fn embed(&self, text: &str) -> BriefResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "lexical"
    }
}
