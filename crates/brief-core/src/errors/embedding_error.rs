/// Embedding subsystem errors.
///
/// These always propagate to the caller. The narrative memory never
/// silently degrades a semantic backend to keyword search.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("embedding endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("empty response from embedding provider")]
    EmptyResponse,
}
