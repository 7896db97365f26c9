//! Request Dispatcher
//!
//! Validate, meter, prompt, call the provider, normalize. The dispatcher holds only shared
//! references and keeps no per-request state, so one instance serves concurrent callers.
//! Provider failures are logged here and go no further.

use crate::brief::{ContentBrief, GenerationAction, GenerationOptions};
use crate::error::{ApiError, ProviderError};
use crate::meter::CreditMeter;
use crate::normalizer::{Normalization, ResponseNormalizer};
use crate::package::ContentPackage;
use crate::prompt;
use crate::provider::ProviderAdapter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What the provider call amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    Responded { provider: String, model: String },
    Failed(ProviderError),
}

impl ProviderOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ProviderOutcome::Failed(_))
    }
}

/// Result of one accepted dispatch. The package is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub action: GenerationAction,
    pub package: ContentPackage,
    pub normalization: Normalization,
    pub provider: ProviderOutcome,
    /// Balance right after this dispatch's credit was taken.
    pub credits_remaining: u32,
}

pub struct RequestDispatcher {
    adapter: Arc<dyn ProviderAdapter>,
    meter: Arc<CreditMeter>,
    request_timeout: Duration,
}

impl RequestDispatcher {
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(
        adapter: Arc<dyn ProviderAdapter>,
        meter: Arc<CreditMeter>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            adapter,
            meter,
            request_timeout,
        }
    }

    pub fn meter(&self) -> &Arc<CreditMeter> {
        &self.meter
    }

    pub fn adapter(&self) -> &Arc<dyn ProviderAdapter> {
        &self.adapter
    }

    /// Run one generation. Errors only for validation and quota, both before any provider
    /// call; every accepted dispatch returns a package.
    pub async fn dispatch(
        &self,
        action: GenerationAction,
        brief: &ContentBrief,
        options: &GenerationOptions,
    ) -> Result<DispatchOutcome, ApiError> {
        brief.validate()?;

        let Some(credits_remaining) = self.meter.consume() else {
            info!(action = %action, "Dispatch rejected: no credits remaining");
            return Err(ApiError::QuotaExhausted);
        };

        let prompt = prompt::build_prompt(action, brief, options);
        let limits = prompt::limits_for(action);

        debug!(
            action = %action,
            provider = self.adapter.provider_name(),
            model = self.adapter.model_name(),
            max_tokens = limits.max_tokens,
            "Dispatching generation request"
        );

        let started = Instant::now();
        let result = match tokio::time::timeout(
            self.request_timeout,
            self.adapter.send(&prompt, limits),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(format!(
                "No response within {}s",
                self.request_timeout.as_secs()
            ))),
        };
        let duration_ms = started.elapsed().as_millis() as u64;

        let (raw, provider) = match result {
            Ok(text) => {
                debug!(
                    action = %action,
                    duration_ms,
                    response_len = text.len(),
                    "Provider responded"
                );
                (
                    Some(text),
                    ProviderOutcome::Responded {
                        provider: self.adapter.provider_name().to_string(),
                        model: self.adapter.model_name().to_string(),
                    },
                )
            }
            Err(err) => {
                warn!(
                    action = %action,
                    provider = self.adapter.provider_name(),
                    error_kind = err.kind(),
                    error = %err,
                    duration_ms,
                    "Provider call failed, using fallback content"
                );
                (None, ProviderOutcome::Failed(err))
            }
        };

        let normalized = ResponseNormalizer::normalize(raw.as_deref(), action);

        info!(
            action = %action,
            normalization = ?normalized.normalization,
            credits_remaining,
            "Generation complete"
        );

        Ok(DispatchOutcome {
            action,
            package: normalized.package,
            normalization: normalized.normalization,
            provider,
            credits_remaining,
        })
    }
}
