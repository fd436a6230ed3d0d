/// Configuration loading and validation errors.
///
/// All of these are fatal at startup: a config that fails validation
/// never reaches the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read failed: {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("config parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("missing credential: {name}")]
    MissingCredential { name: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
