//! Session store: the explicitly owned home of the credit meter and the delivery channel.
//!
//! The credit account can be persisted to a JSON file between CLI invocations. The file
//! is written whole through a temporary sibling and a rename.

use crate::config::StudioConfig;
use crate::delivery::DeliveryChannel;
use crate::error::ApiError;
use crate::meter::{CreditAccount, CreditMeter};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// `$XDG_DATA_HOME/content-studio/session.json`
pub fn default_session_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "content-studio").map(|dirs| dirs.data_dir().join("session.json"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    account: CreditAccount,
    updated_at: DateTime<Utc>,
}

pub struct SessionStore {
    meter: Arc<CreditMeter>,
    delivery: DeliveryChannel,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Session that lives only as long as this value.
    pub fn in_memory(account: CreditAccount, notification_ttl: Duration) -> Self {
        Self {
            meter: Arc::new(CreditMeter::new(account)),
            delivery: DeliveryChannel::new(notification_ttl),
            path: None,
        }
    }

    /// Load the account from `path`, or start a full period if the file does not exist.
    pub fn open(
        path: impl Into<PathBuf>,
        period_max: u32,
        notification_ttl: Duration,
    ) -> Result<Self, ApiError> {
        let path = path.into();
        let account = match read_session_file(&path)? {
            Some(file) => {
                debug!(
                    path = %path.display(),
                    balance = file.account.balance,
                    "Loaded session"
                );
                file.account
            }
            None => {
                info!(path = %path.display(), period_max, "Starting new session");
                CreditAccount::full(period_max)
            }
        };
        Ok(Self {
            meter: Arc::new(CreditMeter::new(account)),
            delivery: DeliveryChannel::new(notification_ttl),
            path: Some(path),
        })
    }

    /// Open the configured session file, or an in-memory session when no data directory
    /// can be resolved.
    pub fn from_config(config: &StudioConfig) -> Result<Self, ApiError> {
        let ttl = config.delivery.notification_ttl();
        match config.session_path() {
            Some(path) => Self::open(path, config.credits.period_max, ttl),
            None => {
                warn!("No data directory available, credits will not persist");
                Ok(Self::in_memory(
                    CreditAccount::full(config.credits.period_max),
                    ttl,
                ))
            }
        }
    }

    pub fn meter(&self) -> &Arc<CreditMeter> {
        &self.meter
    }

    pub fn delivery(&self) -> &DeliveryChannel {
        &self.delivery
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the current account to disk. No-op for in-memory sessions.
    pub fn save(&self) -> Result<(), ApiError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file = SessionFile {
            account: self.meter.snapshot(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| ApiError::SessionError(format!("Failed to serialize session: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        debug!(path = %path.display(), balance = file.account.balance, "Saved session");
        Ok(())
    }

    /// Start a new billing period. Stands in for the external billing collaborator.
    pub fn reset(&self, period_max: u32) -> Result<CreditAccount, ApiError> {
        let account = CreditAccount::full(period_max);
        self.meter.apply_reset(account);
        self.save()?;
        Ok(account)
    }
}

fn read_session_file(path: &Path) -> Result<Option<SessionFile>, ApiError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let file = serde_json::from_str(&contents).map_err(|e| {
        ApiError::SessionError(format!(
            "Failed to parse session file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(Some(file))
}
