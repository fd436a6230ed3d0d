use crate::errors::BriefResult;

/// Chat-completion model.
///
/// One call per summary, bounded output, no retry. Any provider with
/// an OpenAI-compatible completions endpoint satisfies this through
/// the bundled client; tests satisfy it with canned responses.
pub trait IChatModel: Send + Sync {
    /// Run one completion over a system + user message pair and return
    /// the raw response text.
    fn complete(&self, system: &str, user: &str) -> BriefResult<String>;
}
