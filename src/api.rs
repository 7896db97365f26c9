//! Generation endpoint facade
//!
//! Transport-agnostic request/response surface over the dispatcher. `generate` never
//! fails on provider trouble: `success: false` is reserved for validation, quota and
//! unknown-action rejections.

use crate::brief::{ContentBrief, GenerationAction, GenerationOptions};
use crate::config::StudioConfig;
use crate::delivery::Notification;
use crate::dispatch::{DispatchOutcome, RequestDispatcher};
use crate::error::ApiError;
use crate::normalizer::Normalization;
use crate::package::ContentPackage;
use crate::provider::{ProviderAdapter, ProviderFactory, ProviderStatus};
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Incoming generation request, camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub target_length: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    /// Accepted in place of `topic`, mainly for chat.
    #[serde(default)]
    pub message: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl GenerationRequest {
    pub fn new(action: GenerationAction, topic: impl Into<String>) -> Self {
        Self {
            action: action.slug().to_string(),
            topic: Some(topic.into()),
            ..Default::default()
        }
    }

    /// Resolve the wire request into typed inputs. Topic falls back to `message`.
    pub fn resolve(
        &self,
    ) -> Result<(GenerationAction, ContentBrief, GenerationOptions), ApiError> {
        let action: GenerationAction = self.action.parse()?;

        let topic = non_blank(&self.topic)
            .or_else(|| non_blank(&self.message))
            .unwrap_or_default();
        let mut brief = ContentBrief::new(topic);
        if let Some(platform) = non_blank(&self.platform) {
            brief = brief.with_platform(platform.parse()?);
        }
        if let Some(content_type) = non_blank(&self.content_type) {
            brief = brief.with_content_type(content_type.parse()?);
        }
        if let Some(tone) = non_blank(&self.tone) {
            brief = brief.with_tone(tone);
        }
        brief.audience = self.audience.clone();
        brief.context = self.context.clone();
        if !brief.content_type.supports(brief.platform) {
            debug!(
                platform = %brief.platform,
                content_type = %brief.content_type,
                "Content type is not usual for this platform"
            );
        }

        let mut options = GenerationOptions {
            count: self.count,
            target_length: self.target_length.clone(),
            style: self.style.clone(),
            ..Default::default()
        };
        if let Some(niche) = non_blank(&self.niche) {
            options.niche = niche.to_string();
        }

        Ok((action, brief, options))
    }
}

/// Generation endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ContentPackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits_remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization: Option<Normalization>,
    pub notification: Notification,
}

impl GenerationResponse {
    pub fn from_result(
        result: Result<DispatchOutcome, ApiError>,
        notification: Notification,
    ) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                response: Some(outcome.package),
                credits_remaining: Some(outcome.credits_remaining),
                error: None,
                normalization: Some(outcome.normalization),
                notification,
            },
            Err(err) => Self {
                success: false,
                response: None,
                credits_remaining: None,
                error: Some(err.to_string()),
                normalization: None,
                notification,
            },
        }
    }
}

/// Status probe response: `{available, model?, error?}`.
pub type StatusResponse = ProviderStatus;

pub struct StudioApi {
    dispatcher: RequestDispatcher,
    session: Arc<SessionStore>,
}

impl StudioApi {
    pub fn new(
        adapter: Arc<dyn ProviderAdapter>,
        session: Arc<SessionStore>,
        request_timeout: Duration,
    ) -> Self {
        let dispatcher =
            RequestDispatcher::new(adapter, Arc::clone(session.meter()), request_timeout);
        Self {
            dispatcher,
            session,
        }
    }

    /// Composition root: pick the provider and open the session once.
    pub fn from_config(config: &StudioConfig) -> Result<Self, ApiError> {
        let adapter = ProviderFactory::create_adapter(&config.provider)?;
        let session = Arc::new(SessionStore::from_config(config)?);
        Ok(Self::new(
            adapter,
            session,
            config.dispatch.request_timeout(),
        ))
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    /// Dispatch typed inputs, queue the resulting notification, and persist the balance.
    pub async fn dispatch(
        &self,
        action: GenerationAction,
        brief: &ContentBrief,
        options: &GenerationOptions,
    ) -> (Result<DispatchOutcome, ApiError>, Notification) {
        let result = self.dispatcher.dispatch(action, brief, options).await;
        self.finish(result)
    }

    /// Resolve and dispatch one wire request, keeping the typed result.
    pub async fn handle(
        &self,
        request: &GenerationRequest,
    ) -> (Result<DispatchOutcome, ApiError>, Notification) {
        let result = match request.resolve() {
            Ok((action, brief, options)) => {
                self.dispatcher.dispatch(action, &brief, &options).await
            }
            Err(err) => Err(err),
        };
        self.finish(result)
    }

    /// Handle one wire request.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResponse {
        let (result, notification) = self.handle(request).await;
        GenerationResponse::from_result(result, notification)
    }

    /// Advisory provider probe. Never gates generation.
    pub async fn status(&self) -> StatusResponse {
        self.dispatcher.adapter().status().await
    }

    fn finish(
        &self,
        result: Result<DispatchOutcome, ApiError>,
    ) -> (Result<DispatchOutcome, ApiError>, Notification) {
        let notification = self.session.delivery().deliver(&result);
        if result.is_ok() {
            if let Err(e) = self.session.save() {
                warn!(error = %e, "Failed to persist session after dispatch");
            }
        }
        (result, notification)
    }
}
