//! OpenRouter chat-completions client
//!
//! Speaks the OpenAI-compatible chat-completions wire format, which is how
//! Gemini-family models are reached through OpenRouter. One request per
//! query, no retries, no streaming.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{ChatMessage, RecommendationProvider};
use crate::config::ProviderConfig;
use crate::{Result, TripError};

/// Client for the OpenRouter chat-completions API
pub struct OpenRouterClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
}

/// Request payload for the chat-completions endpoint
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

/// Response from the chat-completions endpoint
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

/// A single response choice
#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any usable text came back
    fn content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
    }
}

impl OpenRouterClient {
    /// Create a new client from the provider configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent("TripPlanner/0.1.0")
            .build()
            .map_err(|e| TripError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl RecommendationProvider for OpenRouterClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
        };

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.as_deref().unwrap_or_default()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TripError::provider(e.to_string()))?;

        let duration_ms = start.elapsed().as_millis();
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(
                status = %status,
                duration_ms = %duration_ms,
                "Chat-completions API error"
            );
            return Err(match status.as_u16() {
                401 => TripError::provider(format!(
                    "Invalid or missing API key (HTTP 401): {text}"
                )),
                429 => TripError::provider(format!(
                    "Provider rate limit exceeded (HTTP 429): {text}"
                )),
                _ => TripError::provider(format!("API error {status}: {text}")),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TripError::provider(format!("Failed to parse API response: {e}")))?;

        info!(
            model = %self.model,
            duration_ms = %duration_ms,
            "Chat-completions call completed"
        );

        parsed.content().ok_or(TripError::EmptyResponse)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
