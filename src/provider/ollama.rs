//! Local-model client for an Ollama server on loopback. No credential.

use super::{
    build_provider_http_client, map_http_error, map_status, GenerationLimits, HttpTimeouts,
    Prompt, ProviderAdapter, ProviderStatus,
};
use crate::error::{ApiError, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.1";

pub struct OllamaClient {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaClient {
    pub fn new(
        model: String,
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
            base_url,
        })
    }
}

// OpenAI-compatible request/response structures served by Ollama under /v1
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub(crate) fn parse_chat_completion_body(body: &str) -> Result<String, ProviderError> {
    let completion: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::InvalidResponse("No choices in response".to_string()))
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct ModelInfo {
    name: String,
}

/// Ollama tags carry an implicit `:latest` when none is given.
fn model_matches(installed: &str, wanted: &str) -> bool {
    installed == wanted
        || installed
            .strip_suffix(":latest")
            .is_some_and(|base| base == wanted)
}

#[async_trait]
impl ProviderAdapter for OllamaClient {
    async fn send(
        &self,
        prompt: &Prompt,
        limits: GenerationLimits,
    ) -> Result<String, ProviderError> {
        let mut messages = Vec::with_capacity(2);
        if !prompt.system.is_empty() {
            messages.push(ChatMessage {
                role: "system",
                content: &prompt.system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &prompt.user,
        });

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: limits.temperature,
            max_tokens: limits.max_tokens,
            stream: false,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_http_error)?;
        if !status.is_success() {
            return Err(map_status(status, &body));
        }
        parse_chat_completion_body(&body)
    }

    async fn status(&self) -> ProviderStatus {
        let url = format!("{}/api/tags", self.base_url);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                return ProviderStatus::unavailable(
                    &self.model,
                    format!("Local model server is not reachable: {}", map_http_error(e)),
                )
            }
        };
        if !response.status().is_success() {
            return ProviderStatus::unavailable(
                &self.model,
                format!("Local model server returned {}", response.status()),
            );
        }
        match response.json::<TagsResponse>().await {
            Ok(tags) if tags.models.iter().any(|m| model_matches(&m.name, &self.model)) => {
                ProviderStatus::available(&self.model)
            }
            Ok(_) => ProviderStatus::unavailable(
                &self.model,
                format!("Model '{}' is not installed on the local server", self.model),
            ),
            Err(e) => ProviderStatus::unavailable(
                &self.model,
                format!("Failed to parse models response: {}", e),
            ),
        }
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
