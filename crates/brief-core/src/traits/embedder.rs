use crate::errors::BriefResult;

/// Text-embedding backend.
///
/// The backend is chosen once at construction time. Implementations
/// must be deterministic for identical input, or caching above them
/// breaks.
pub trait IEmbedder: Send + Sync {
    /// Embed a single text, returning a fixed-dimension vector.
    fn embed(&self, text: &str) -> BriefResult<Vec<f32>>;

    /// The dimensionality of vectors produced by this embedder.
    fn dimensions(&self) -> usize;

    /// Human-readable embedder name, used in logs.
    fn name(&self) -> &str;
}
