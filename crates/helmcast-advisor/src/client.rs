//! Chat-completion client that turns a composed prompt into advice text.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::error::AdvisorError;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Fixed persona sent with every advice request.
const SYSTEM_PROMPT: &str = "You are a helpful sailing expert.";

/// Advice text substituted when the completion carries no content.
pub const FALLBACK_ADVICE: &str = "No advice received";

/// Client for the chat-completion endpoint.
pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl CompletionClient {
    /// Create a new completion client.
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            model: model.to_string(),
        })
    }

    /// Request advice for the composed prompt.
    ///
    /// A 2xx response whose first choice has no content (or empty content)
    /// degrades to [`FALLBACK_ADVICE`] instead of failing.
    #[instrument(skip(self, prompt), level = "info")]
    pub async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Api { status, message });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::InvalidResponse(format!("Invalid response body: {}", e)))?;

        match completion.first_content() {
            Some(content) if !content.is_empty() => Ok(content.to_string()),
            _ => {
                tracing::warn!("Completion response carried no content");
                Ok(FALLBACK_ADVICE.to_string())
            }
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}
