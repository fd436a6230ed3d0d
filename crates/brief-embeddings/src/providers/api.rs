//! OpenAI-compatible embedding endpoint client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use brief_core::config::EmbeddingConfig;
use brief_core::errors::{BriefResult, ConfigError, EmbeddingError};
use brief_core::traits::IEmbedder;

/// Blocking client for a `/embeddings` endpoint.
///
/// One attempt per call, no retry; failures propagate as
/// [`EmbeddingError`]. Response dimensionality is validated against the
/// configured expectation before a vector leaves this type.
#[derive(Debug)]
pub struct ApiEmbedder {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl ApiEmbedder {
    pub fn new(config: &EmbeddingConfig) -> BriefResult<Self> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => {
                return Err(ConfigError::MissingCredential {
                    name: "embedding.api_key".to_string(),
                }
                .into())
            }
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            dimensions: config.dimensions,
        })
    }
}

impl IEmbedder for ApiEmbedder {
    fn embed(&self, text: &str) -> BriefResult<Vec<f32>> {
        let url = format!("{}/embeddings", self.base_url);
        debug!(model = %self.model, chars = text.len(), "requesting embedding");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: [text],
            })
            .send()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::RequestFailed {
                    reason: format!("deserialization failed: {e}"),
                })?;

        match parsed.data.into_iter().next() {
            Some(data) if data.embedding.len() == self.dimensions => Ok(data.embedding),
            Some(data) => Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: data.embedding.len(),
            }
            .into()),
            None => Err(EmbeddingError::EmptyResponse.into()),
        }
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
