//! # brief-core
//!
//! Foundation crate for the brief summary pipeline.
//! Defines all shared types, traits, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod records;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BriefConfig;
pub use errors::{BriefError, BriefResult};
pub use metrics::{
    HeadlineMetric, MarketingMetric, MetricCategory, MetricUnit, MetricValue, NormalizedMetric,
    NormalizedMetrics, RawMetrics,
};
pub use models::{ContextBundle, Insight, InsightKind, MemoryRecord, Severity};
