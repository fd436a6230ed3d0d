//! OpenAI-compatible chat completion client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use brief_core::config::ModelConfig;
use brief_core::errors::{BriefResult, ConfigError, ModelError};
use brief_core::traits::IChatModel;

/// Blocking client for a `/chat/completions` endpoint.
///
/// One attempt per call, no retry. Errors propagate as [`ModelError`];
/// the summary generator is the layer that converts them into the
/// sentinel error summary.
#[derive(Debug)]
pub struct ChatClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatClient {
    pub fn new(config: &ModelConfig) -> BriefResult<Self> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => {
                return Err(ConfigError::MissingCredential {
                    name: "model.api_key".to_string(),
                }
                .into())
            }
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| ModelError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

impl IChatModel for ChatClient {
    fn complete(&self, system: &str, user: &str) -> BriefResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        info!(
            model = %self.model,
            max_tokens = self.max_tokens,
            prompt_chars = user.len(),
            "dispatching chat completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages: [
                    ChatMessage {
                        role: "system",
                        content: system,
                    },
                    ChatMessage {
                        role: "user",
                        content: user,
                    },
                ],
                max_tokens: self.max_tokens,
            })
            .send()
            .map_err(|e| ModelError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ModelError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: ChatResponse = response.json().map_err(|e| ModelError::RequestFailed {
            reason: format!("deserialization failed: {e}"),
        })?;

        match parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
        {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(ModelError::EmptyResponse.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_core::errors::BriefError;

    #[test]
    fn missing_key_fails_at_construction() {
        let err = ChatClient::new(&ModelConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            BriefError::ConfigError(ConfigError::MissingCredential { .. })
        ));
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = ModelConfig {
            api_key: Some("k".to_string()),
            base_url: "https://example.test/v1/".to_string(),
            ..Default::default()
        };
        let client = ChatClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://example.test/v1");
    }

    #[test]
    fn request_body_shape_is_stable() {
        let request = ChatRequest {
            model: "gpt-4",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: 400,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert_eq!(json["max_tokens"], 400);
    }
}
