use crate::errors::BriefResult;
use crate::models::MemoryRecord;

/// External narrative store.
///
/// Implementations wrap an out-of-process service (hosted memory API,
/// database, file store). The narrative memory delegates writes and
/// relevance queries here when built with the external backend; the
/// local append-only log stays authoritative for latest-narrative
/// lookups either way.
pub trait IMemoryStore: Send {
    /// Persist one record.
    fn add(&mut self, record: &MemoryRecord) -> BriefResult<()>;

    /// Relevance-ranked records for a query, optionally scoped to one
    /// business, at most `top_k` results.
    fn query(
        &self,
        query: &str,
        business_id: Option<&str>,
        top_k: usize,
    ) -> BriefResult<Vec<MemoryRecord>>;
}
