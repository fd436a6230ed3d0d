use serde::{Deserialize, Serialize};

use super::memory_record::MemoryRecord;

/// Everything the context builder assembles for one summary request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextBundle {
    /// Latest narrative for the business, empty when none exists.
    pub narrative: String,
    /// Relevance-ranked historical records.
    pub retrieved: Vec<MemoryRecord>,
    /// The query the context was built for, carried for traceability.
    pub user_query: String,
}
