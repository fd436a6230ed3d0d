//! # brief-context
//!
//! Memory and retrieval for historical campaign summaries.
//!
//! ## Architecture
//!
//! ```text
//! ContextBuilder
//! ├── NarrativeMemory          (append-only summary log + backend)
//! │   ├── External(IMemoryStore)
//! │   ├── Semantic(SemanticIndex)
//! │   └── Keyword              (substring scan, newest first)
//! └── RetrievalEngine<R>       (generic two-tier RAG substrate)
//! ```
//!
//! `NarrativeMemory` is the summary-specific store; `RetrievalEngine`
//! is the same idea generalized over any `Retrievable` record type.
//! `ContextBuilder` composes both into a `ContextBundle` for the
//! prompt layer.

pub mod builder;
pub mod narrative;
pub mod retrieval;

pub use builder::ContextBuilder;
pub use narrative::{MemoryBackend, NarrativeMemory};
pub use retrieval::{Retrievable, RetrievalEngine};
