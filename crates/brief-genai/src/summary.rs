//! Executive summary orchestrator.
//!
//! The full pipeline: raw records in, one summary string out.
//!
//! ```text
//! records -> raw metrics -> normalize -> context -> prompt -> chat model
//! ```
//!
//! The chat call is the only place an external failure is converted to
//! a value instead of an error: a failed completion becomes the
//! [`SUMMARY_ERROR`] sentinel so a report is always produced. Every
//! other failure (config, embedding backend) propagates.

use std::collections::HashSet;

use tracing::{debug, warn};

use brief_context::{ContextBuilder, NarrativeMemory, RetrievalEngine};
use brief_core::config::BriefConfig;
use brief_core::errors::{BriefResult, ConfigError};
use brief_core::metrics::{HeadlineMetric, RawMetrics};
use brief_core::models::MemoryRecord;
use brief_core::records::{
    Account, Activity, Attendee, Campaign, Contact, Opportunity, Response,
};
use brief_core::traits::IChatModel;
use brief_embeddings::SemanticIndex;
use brief_semantic::MetricNormalizer;

use crate::chat::ChatClient;
use crate::prompt::PromptBuilder;

/// Returned in place of a summary when the chat call fails.
/// Callers detect the failure by the `[ERROR]` prefix.
pub const SUMMARY_ERROR: &str =
    "[ERROR] Failed to generate summary. Please check your API key and try again.";

/// One summary invocation's inputs: the seven record sets plus the
/// optional query, caller instructions, and business scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRequest<'a> {
    pub campaigns: &'a [Campaign],
    pub attendees: &'a [Attendee],
    pub responses: &'a [Response],
    pub activities: &'a [Activity],
    pub contacts: &'a [Contact],
    pub accounts: &'a [Account],
    pub opportunities: &'a [Opportunity],
    pub program_name: Option<&'a str>,
    pub user_prompt: Option<&'a str>,
    pub business_id: Option<&'a str>,
}

/// End-to-end summary pipeline.
///
/// Owns the normalizer, prompt builder, chat model, and both history
/// stores. Seed history through [`memory_mut`](Self::memory_mut) and
/// [`retriever_mut`](Self::retriever_mut) before generating.
pub struct SummaryGenerator {
    normalizer: MetricNormalizer,
    prompt_builder: PromptBuilder,
    model: Box<dyn IChatModel>,
    memory: NarrativeMemory,
    retriever: RetrievalEngine<MemoryRecord>,
    top_k: usize,
}

impl SummaryGenerator {
    /// Fully-injected constructor. Retrieval uses the default `top_k`.
    pub fn new(
        normalizer: MetricNormalizer,
        prompt_builder: PromptBuilder,
        model: Box<dyn IChatModel>,
        memory: NarrativeMemory,
        retriever: RetrievalEngine<MemoryRecord>,
    ) -> Self {
        Self {
            normalizer,
            prompt_builder,
            model,
            memory,
            retriever,
            top_k: brief_core::config::defaults::DEFAULT_TOP_K,
        }
    }

    /// Wire the pipeline from configuration: chat client, prompt role,
    /// and the memory backend named by `memory.backend`.
    pub fn from_config(config: &BriefConfig) -> BriefResult<Self> {
        config.validate()?;

        let model = Box::new(ChatClient::new(&config.model)?);
        let (memory, retriever) = match config.memory.backend.as_str() {
            "keyword" => (NarrativeMemory::keyword(), RetrievalEngine::keyword()),
            "semantic" => (
                NarrativeMemory::semantic(SemanticIndex::from_config(&config.embedding)?),
                RetrievalEngine::semantic(SemanticIndex::from_config(&config.embedding)?),
            ),
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "memory.backend".to_string(),
                    reason: format!("unknown backend '{other}'"),
                }
                .into())
            }
        };

        Ok(Self {
            normalizer: MetricNormalizer::default(),
            prompt_builder: PromptBuilder::from_config(&config.prompt),
            model,
            memory,
            retriever,
            top_k: config.memory.top_k,
        })
    }

    pub fn memory(&self) -> &NarrativeMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut NarrativeMemory {
        &mut self.memory
    }

    pub fn retriever_mut(&mut self) -> &mut RetrievalEngine<MemoryRecord> {
        &mut self.retriever
    }

    /// Run the pipeline once and produce the summary text.
    ///
    /// Chat failure yields `Ok(SUMMARY_ERROR)`, never `Err`. With the
    /// keyword backend the whole call is infallible; a semantic
    /// backend can fail while embedding the context query, and that
    /// error propagates.
    pub fn generate_summary(&self, request: &SummaryRequest<'_>) -> BriefResult<String> {
        let raw = derive_raw_metrics(request);
        let metrics = self.normalizer.normalize(&raw);
        let tags = metrics.strategic_tags();

        let context = ContextBuilder::new(&self.memory, &self.retriever)
            .with_top_k(self.top_k)
            .build_context(request.program_name.unwrap_or(""), request.business_id)?;

        let key_contacts = key_contacts(request.attendees, request.contacts);
        let notable_accounts = notable_accounts(request.attendees, request.accounts);
        let instructions =
            compose_instructions(request.user_prompt, &key_contacts, &notable_accounts);

        debug!(
            metrics = metrics.len(),
            tags = tags.len(),
            history = context.retrieved.len(),
            contacts = key_contacts.len(),
            accounts = notable_accounts.len(),
            "summary inputs assembled"
        );

        let prompt = self.prompt_builder.build_prompt(
            &metrics,
            &tags,
            &context.retrieved,
            Some(&instructions),
        );

        match self.model.complete(&prompt.system, &prompt.user) {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "chat completion failed, returning error summary");
                Ok(SUMMARY_ERROR.to_string())
            }
        }
    }
}

/// Derive the raw metric map from the record sets.
///
/// The ratio metrics are proxies over the counts that exist upstream,
/// not true business formulas: no ad-spend or impression data reaches
/// this pipeline. Raw keys use mixed alias spellings on purpose; the
/// normalizer resolves them to canonical names.
fn derive_raw_metrics(request: &SummaryRequest<'_>) -> RawMetrics {
    let attendee_count = request.attendees.len();
    let opportunity_count = request.opportunities.len();
    let pipeline: f64 = request.opportunities.iter().map(|o| o.amount).sum();

    let mut raw = RawMetrics::new();
    raw.set_headline(HeadlineMetric::Attendees, attendee_count);
    raw.set_headline(HeadlineMetric::Opportunities, opportunity_count);
    raw.set_headline(HeadlineMetric::Pipeline, pipeline);

    // Acquisition cost proxy: pipeline value per opportunity.
    if opportunity_count > 0 {
        raw.insert(
            "customer acquisition cost",
            pipeline / opportunity_count as f64,
        );
    }
    // Lifetime value proxy: pipeline value per attendee.
    raw.insert(
        "LTV",
        if attendee_count > 0 {
            pipeline / attendee_count as f64
        } else {
            0.0
        },
    );
    // Return proxy: pipeline as revenue over a unit spend.
    raw.insert("roas", pipeline);
    // Click-through proxy: activities as clicks, attendees as impressions.
    raw.insert(
        "Click Through Rate",
        if attendee_count > 0 {
            request.activities.len() as f64 / attendee_count as f64 * 100.0
        } else {
            0.0
        },
    );
    raw.insert(
        "Conversion Rate",
        if attendee_count > 0 {
            opportunity_count as f64 / attendee_count as f64 * 100.0
        } else {
            0.0
        },
    );
    raw
}

/// Attendees with a matching CRM contact (exact name and email), as
/// `"Name (email)"`, capped at three. Falls back to the first three
/// attendees when nobody matches.
fn key_contacts(attendees: &[Attendee], contacts: &[Contact]) -> Vec<String> {
    let mut matched = Vec::new();
    for attendee in attendees {
        if let Some(contact) = contacts
            .iter()
            .find(|c| c.name == attendee.name && c.email == attendee.email)
        {
            matched.push(format!("{} ({})", contact.name, contact.email));
        }
        if matched.len() >= 3 {
            break;
        }
    }
    if matched.is_empty() {
        matched = attendees
            .iter()
            .take(3)
            .map(|a| format!("{} ({})", a.name, a.email))
            .collect();
    }
    matched
}

/// Names of accounts referenced by any attendee, in account-list order.
fn notable_accounts(attendees: &[Attendee], accounts: &[Account]) -> Vec<String> {
    let referenced: HashSet<&str> = attendees
        .iter()
        .filter_map(|a| a.account_id.as_deref())
        .filter(|id| !id.is_empty())
        .collect();
    accounts
        .iter()
        .filter(|a| referenced.contains(a.id.as_str()))
        .map(|a| a.name.clone())
        .collect()
}

/// Caller instructions plus the contact and account digests.
fn compose_instructions(
    user_prompt: Option<&str>,
    key_contacts: &[String],
    notable_accounts: &[String],
) -> String {
    let mut out = user_prompt.unwrap_or("").to_string();
    if !key_contacts.is_empty() {
        out.push_str("\nKey Contacts:\n");
        out.push_str(&key_contacts.join("\n"));
    }
    if !notable_accounts.is_empty() {
        out.push_str("\nNotable Accounts: ");
        out.push_str(&notable_accounts.join(", "));
    }
    out
}
