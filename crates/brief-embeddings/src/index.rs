//! Flat in-process vector index.
//!
//! Brute-force cosine scan over every stored vector. The pipeline
//! holds at most a few hundred records per invocation, so a flat scan
//! beats any index structure worth maintaining.

use std::cmp::Ordering;

use brief_core::errors::{BriefResult, EmbeddingError};

/// Append-only vector store with cosine-similarity search.
///
/// Slots are assigned in insertion order and never reused; callers map
/// slots back to their own records.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
}

impl VectorIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: Vec::new(),
        }
    }

    /// Append a vector and return its slot. Rejects vectors of the
    /// wrong dimensionality.
    pub fn add(&mut self, vector: Vec<f32>) -> BriefResult<usize> {
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }
        self.vectors.push(vector);
        Ok(self.vectors.len() - 1)
    }

    /// Slots of the `top_k` most similar vectors, scored by cosine
    /// similarity, ordered descending. A zero-norm query matches
    /// nothing.
    pub fn search(&self, query: &[f32], top_k: usize) -> BriefResult<Vec<(usize, f32)>> {
        if query.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            }
            .into());
        }
        let query_norm_sq: f32 = query.iter().map(|x| x * x).sum();
        if query_norm_sq <= f32::EPSILON {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(slot, stored)| (slot, cosine_similarity(query, stored)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Cosine similarity between two equal-length vectors. Zero when
/// either norm vanishes.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
