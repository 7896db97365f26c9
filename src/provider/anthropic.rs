//! Remote hosted-model client for the Anthropic Messages API.

use super::{
    build_provider_http_client, map_http_error, map_status, GenerationLimits, HttpTimeouts,
    Prompt, ProviderAdapter, ProviderStatus,
};
use crate::error::{ApiError, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(
        model: String,
        api_key: String,
        base_url: Option<String>,
        timeouts: HttpTimeouts,
    ) -> Result<Self, ApiError> {
        let client = build_provider_http_client(timeouts)?;
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            client,
            model,
            api_key,
            base_url,
        })
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Extract the first text block from a Messages API response body.
pub(crate) fn parse_messages_body(body: &str) -> Result<String, ProviderError> {
    let response: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| ProviderError::InvalidResponse("No text content in response".to_string()))
}

#[async_trait]
impl ProviderAdapter for AnthropicClient {
    async fn send(
        &self,
        prompt: &Prompt,
        limits: GenerationLimits,
    ) -> Result<String, ProviderError> {
        let mut request_body = json!({
            "model": self.model,
            "max_tokens": limits.max_tokens,
            "temperature": limits.temperature,
            "messages": [{"role": "user", "content": prompt.user}],
        });
        if !prompt.system.is_empty() {
            request_body["system"] = json!(prompt.system);
        }

        let url = format!("{}/v1/messages", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_http_error)?;
        if !status.is_success() {
            return Err(map_status(status, &body));
        }
        parse_messages_body(&body)
    }

    async fn status(&self) -> ProviderStatus {
        if self.api_key.trim().is_empty() {
            ProviderStatus::unavailable(&self.model, format!("{} not set", API_KEY_ENV))
        } else {
            ProviderStatus::available(&self.model)
        }
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
