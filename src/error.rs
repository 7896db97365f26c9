//! Error types for the content generation layer.

use thiserror::Error;

/// Failure of a single provider call.
///
/// These never reach an end user: the dispatcher absorbs them and the normalizer
/// substitutes catalog content instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider request timed out: {0}")]
    Timeout(String),
}

impl ProviderError {
    /// Stable slug used in logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Unavailable(_) => "unavailable",
            ProviderError::RateLimited(_) => "rate_limited",
            ProviderError::InvalidResponse(_) => "invalid_response",
            ProviderError::Timeout(_) => "timeout",
        }
    }
}

/// Errors surfaced to callers of the dispatcher, the endpoint facade, and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error("No credits remaining. Please upgrade your plan.")]
    QuotaExhausted,

    #[error("Unknown generation action: {0}")]
    UnknownAction(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// True for rejections that happen before any side effect (no credit, no provider call).
    pub fn is_pre_dispatch_rejection(&self) -> bool {
        matches!(
            self,
            ApiError::Validation(_)
                | ApiError::InvalidInput(_)
                | ApiError::QuotaExhausted
                | ApiError::UnknownAction(_)
        )
    }
}
