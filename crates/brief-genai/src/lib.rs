//! # brief-genai
//!
//! The model-facing half of the pipeline: prompt construction, insight
//! detection, the chat client, and the summary orchestrator.
//!
//! ## Architecture
//!
//! ```text
//! SummaryGenerator
//! ├── MetricNormalizer   (brief-semantic)
//! ├── NarrativeMemory    (brief-context)
//! ├── RetrievalEngine    (brief-context)
//! ├── PromptBuilder      -> PromptPair {system, user}
//! └── IChatModel         (ChatClient over /chat/completions)
//!
//! InsightEngine          (rule-based, feeds the executive template)
//! ```

pub mod chat;
pub mod insights;
pub mod prompt;
pub mod summary;
pub mod telemetry;

pub use chat::ChatClient;
pub use insights::{InsightEngine, MetricHistory};
pub use prompt::{PromptBuilder, PromptPair};
pub use summary::{SummaryGenerator, SummaryRequest, SUMMARY_ERROR};
