//! # brief-embeddings
//!
//! Embedding generation and in-process vector search for the semantic
//! context backend.
//!
//! ## Architecture
//!
//! ```text
//! SemanticIndex
//! ├── IEmbedder (chosen at construction)
//! │   ├── ApiEmbedder     (OpenAI-compatible endpoint)
//! │   └── LexicalEmbedder (deterministic, offline)
//! ├── EmbeddingCache      (moka, keyed by blake3 text hash)
//! └── VectorIndex         (flat cosine scan)
//! ```
//!
//! Provider selection happens once; there is no runtime degradation
//! chain, and embedding failures always surface to the caller.

pub mod cache;
pub mod index;
pub mod providers;
pub mod service;

pub use cache::EmbeddingCache;
pub use index::VectorIndex;
pub use providers::{ApiEmbedder, LexicalEmbedder};
pub use service::SemanticIndex;
