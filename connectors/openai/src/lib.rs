//! OpenAI connector for ZapGPT completions

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use zapgpt_core::prelude::*;

mod config;
mod models;

pub use config::{OpenAiConfig, DEFAULT_API_BASE, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use models::*;

/// Role attached to the single message sent upstream
const USER_ROLE: &str = "user";

/// OpenAI implementation of CompletionClient
pub struct OpenAiConnector {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiConnector {
    /// Create a new OpenAI connector
    pub fn new(config: OpenAiConfig) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = builder
            .build()
            .map_err(|e| CompletionError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Serialize the single-message request body for `prompt`
    fn build_request_body(&self, prompt: &Prompt) -> Result<Vec<u8>, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![OpenAiMessage {
                role: USER_ROLE,
                content: prompt.as_str(),
            }],
            max_tokens: self.config.max_tokens,
        };

        serde_json::to_vec(&request).map_err(|e| CompletionError::Serialization(e.to_string()))
    }

    /// Parse the upstream body and pull out the first choice's text
    fn parse_completion_response(&self, body: &[u8]) -> Result<String, CompletionError> {
        let response: ChatCompletionResponse = serde_json::from_slice(body).map_err(|e| {
            // Error bodies have a different shape; surface their message when present
            match serde_json::from_slice::<OpenAiError>(body) {
                Ok(upstream) => {
                    error!("OpenAI returned an error body: {}", upstream.error.message);
                    CompletionError::Deserialization(format!(
                        "{} (upstream error: {})",
                        e, upstream.error.message
                    ))
                }
                Err(_) => {
                    error!("Failed to parse completion response: {}", e);
                    CompletionError::Deserialization(e.to_string())
                }
            }
        })?;

        debug!(
            "Parsed completion {} from model '{}' with {} choice(s)",
            response.id.as_deref().unwrap_or("<none>"),
            response.model.as_deref().unwrap_or("<none>"),
            response.choices.len()
        );

        if let Some(usage) = &response.usage {
            info!(
                "OpenAI token usage: {:?} prompt, {:?} completion, {:?} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?;

        if let Some(reason) = &choice.finish_reason {
            debug!("First choice finished with reason: {}", reason);
        }

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl CompletionClient for OpenAiConnector {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        debug!("Starting OpenAI completion for prompt of {} bytes", prompt.len());
        let start_time = Instant::now();

        let body = self.build_request_body(prompt)?;

        // Single attempt, no retry
        let response = self
            .client
            .post(self.config.completions_url())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI request failed: {}", e);
                CompletionError::Transport(e.to_string())
            })?;

        // Status is not checked; the body is parsed either way
        let status = response.status();
        if !status.is_success() {
            warn!("OpenAI responded with status {}", status);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CompletionError::ReadFailure(e.to_string()))?;

        let text = self.parse_completion_response(&bytes)?;

        info!(
            "OpenAI completion finished in {}ms",
            start_time.elapsed().as_millis()
        );

        Ok(text)
    }
}
