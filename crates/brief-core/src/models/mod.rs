pub mod context_bundle;
pub mod insight;
pub mod memory_record;

pub use context_bundle::ContextBundle;
pub use insight::{Insight, InsightKind, Severity};
pub use memory_record::MemoryRecord;
