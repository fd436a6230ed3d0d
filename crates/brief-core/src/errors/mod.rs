pub mod config_error;
pub mod embedding_error;
pub mod model_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use model_error::ModelError;

/// Unified error type for the brief pipeline.
///
/// Subsystem errors convert into this via `#[from]`, so every fallible
/// operation in the workspace can return [`BriefResult`].
#[derive(Debug, thiserror::Error)]
pub enum BriefError {
    /// A metric name or alias that no registered definition covers.
    /// Callers treat this as "unknown metric", not as a fatal failure.
    #[error("unknown metric: {alias}")]
    UnknownMetric { alias: String },

    /// Two metric definitions claimed the same canonical name.
    #[error("duplicate canonical metric: {name}")]
    DuplicateMetric { name: String },

    /// An external narrative store rejected an operation.
    #[error("memory store error: {reason}")]
    StoreError { reason: String },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("model error: {0}")]
    ModelError(#[from] ModelError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience result alias used across all brief crates.
pub type BriefResult<T> = Result<T, BriefError>;
