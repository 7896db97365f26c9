//! Provider profile: the `[provider]` configuration section and how it resolves to a
//! concrete backend.

use super::{anthropic, ollama, HttpTimeouts};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which backend to talk to. `Auto` picks the remote service when a credential is
/// present and the local server otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    Auto,
    Anthropic,
    Ollama,
}

pub fn provider_type_slug(provider_type: ProviderType) -> &'static str {
    match provider_type {
        ProviderType::Auto => "auto",
        ProviderType::Anthropic => "anthropic",
        ProviderType::Ollama => "ollama",
    }
}

/// Resolved backend with everything needed to build a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelProvider {
    Anthropic {
        model: String,
        api_key: String,
        base_url: Option<String>,
    },
    Ollama {
        model: String,
        base_url: Option<String>, // Default: http://localhost:11434
    },
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub provider_type: ProviderType,

    /// Model name; the backend's default when unset.
    #[serde(default)]
    pub model: Option<String>,

    /// Remote credential. `ANTHROPIC_API_KEY` is used when unset.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL override (e.g. a non-default Ollama port)
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: ProviderType::Auto,
            model: None,
            api_key: None,
            endpoint: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err("Model name cannot be empty".to_string());
            }
        }

        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!("Invalid endpoint URL: {}", endpoint));
            }
        }

        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err("Provider timeouts must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn http_timeouts(&self) -> HttpTimeouts {
        HttpTimeouts {
            connect: Duration::from_secs(self.connect_timeout_secs),
            request: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Configured key first, then the environment. Blank values count as absent.
    pub fn credential(&self) -> Option<String> {
        self.credential_or(std::env::var(anthropic::API_KEY_ENV).ok())
    }

    fn credential_or(&self, from_env: Option<String>) -> Option<String> {
        let non_blank = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(non_blank)
            .or_else(|| from_env.filter(non_blank))
    }

    /// Concrete backend this profile selects for the given credential.
    pub fn resolved_type(&self, credential: Option<&str>) -> ProviderType {
        match self.provider_type {
            ProviderType::Auto if credential.is_some() => ProviderType::Anthropic,
            ProviderType::Auto => ProviderType::Ollama,
            explicit => explicit,
        }
    }

    pub fn to_model_provider(&self) -> Result<ModelProvider, ApiError> {
        self.model_provider_with_credential(self.credential())
    }

    pub fn model_provider_with_credential(
        &self,
        credential: Option<String>,
    ) -> Result<ModelProvider, ApiError> {
        let credential = credential.filter(|key| !key.trim().is_empty());
        match self.resolved_type(credential.as_deref()) {
            ProviderType::Ollama => Ok(ModelProvider::Ollama {
                model: self
                    .model
                    .clone()
                    .unwrap_or_else(|| ollama::DEFAULT_MODEL.to_string()),
                base_url: self.endpoint.clone(),
            }),
            _ => {
                let api_key = credential.ok_or_else(|| {
                    ApiError::ProviderNotConfigured(format!(
                        "Anthropic provider requires an API key: set {} or provider.api_key",
                        anthropic::API_KEY_ENV
                    ))
                })?;
                Ok(ModelProvider::Anthropic {
                    model: self
                        .model
                        .clone()
                        .unwrap_or_else(|| anthropic::DEFAULT_MODEL.to_string()),
                    api_key,
                    base_url: self.endpoint.clone(),
                })
            }
        }
    }
}
