//! # brief-semantic
//!
//! Semantic layer: the canonical marketing-metric ontology and the
//! normalizer that maps raw metric maps onto it.

pub mod normalizer;
pub mod ontology;

pub use normalizer::MetricNormalizer;
pub use ontology::MetricOntology;
