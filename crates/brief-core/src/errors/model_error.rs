/// Chat model call errors.
///
/// The summary generator catches these at its boundary and substitutes
/// the sentinel error summary; they never escape `generate_summary`.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model client build failed: {reason}")]
    ClientBuild { reason: String },

    #[error("model request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("model endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("empty completion from model")]
    EmptyResponse,
}
