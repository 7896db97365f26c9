//! Configuration System
//!
//! Layered configuration: built-in defaults, the global user file, the workspace file,
//! then `STUDIO_*` environment variables. Validation runs once after the merge.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub use crate::provider::{ProviderConfig, ProviderType};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub credits: CreditsConfig,

    #[serde(default)]
    pub dispatch: DispatchConfig,

    #[serde(default)]
    pub delivery: DeliveryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_period_max() -> u32 {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsConfig {
    /// Allowance granted at the start of each billing period
    #[serde(default = "default_period_max")]
    pub period_max: u32,

    /// Session file override; the data directory is used when unset
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        Self {
            period_max: default_period_max(),
            session_file: None,
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Hard bound on one provider call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl DispatchConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_notification_ttl_secs() -> u64 {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_notification_ttl_secs")]
    pub notification_ttl_secs: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            notification_ttl_secs: default_notification_ttl_secs(),
        }
    }
}

impl DeliveryConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Provider(String),
    Credits(String),
    Dispatch(String),
    Delivery(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "provider: {}", msg),
            ValidationError::Credits(msg) => write!(f, "credits: {}", msg),
            ValidationError::Dispatch(msg) => write!(f, "dispatch: {}", msg),
            ValidationError::Delivery(msg) => write!(f, "delivery: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl StudioConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.provider.validate() {
            errors.push(ValidationError::Provider(e));
        }
        if self.credits.period_max == 0 {
            errors.push(ValidationError::Credits(
                "period_max must be greater than zero".to_string(),
            ));
        }
        if self.dispatch.request_timeout_secs == 0 {
            errors.push(ValidationError::Dispatch(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.delivery.notification_ttl_secs == 0 {
            errors.push(ValidationError::Delivery(
                "notification_ttl_secs must be greater than zero".to_string(),
            ));
        }
        if let Err(e) = crate::logging::validate(&self.logging) {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Session file to use: the configured override or the data directory default.
    pub fn session_path(&self) -> Option<PathBuf> {
        self.credits
            .session_file
            .clone()
            .or_else(crate::session::default_session_path)
    }
}
