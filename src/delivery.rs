//! Result Delivery Channel
//!
//! Turns dispatch results into short-lived, severity-tagged notifications. Notifications
//! sit in a FIFO list until dismissed or until their TTL passes; expiry is evaluated
//! against a caller-supplied clock so nothing here spawns timers.

use crate::brief::GenerationAction;
use crate::dispatch::{DispatchOutcome, ProviderOutcome};
use crate::error::{ApiError, ProviderError};
use crate::normalizer::Normalization;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Severity, title and message for a dispatch result, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl NotificationDraft {
    fn new(severity: Severity, title: &str, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.to_string(),
            message: message.into(),
        }
    }

    /// Map a dispatch result to what the user should be told.
    pub fn for_result(result: &Result<DispatchOutcome, ApiError>) -> Self {
        match result {
            Ok(outcome) => Self::for_outcome(outcome),
            Err(err) => Self::for_error(err),
        }
    }

    /// Rejections raised before dispatch.
    pub fn for_error(err: &ApiError) -> Self {
        match err {
            ApiError::Validation(message) => {
                Self::new(Severity::Warning, "Topic Required", message.clone())
            }
            ApiError::InvalidInput(message) => {
                Self::new(Severity::Warning, "Invalid Request", message.clone())
            }
            ApiError::QuotaExhausted => Self::new(
                Severity::Error,
                "No Credits",
                "You've used all your credits. Upgrade to continue.",
            ),
            other => Self::new(Severity::Error, "Generation Failed", other.to_string()),
        }
    }

    fn for_outcome(outcome: &DispatchOutcome) -> Self {
        match (&outcome.normalization, &outcome.provider) {
            (Normalization::Fallback { .. }, ProviderOutcome::Failed(err)) => Self::new(
                Severity::Info,
                "Content Generated",
                format!("Generated with sample data. {}", failure_hint(err)),
            ),
            (Normalization::Fallback { .. }, ProviderOutcome::Responded { .. }) => Self::new(
                Severity::Info,
                "Content Generated",
                "Generated with sample data. The provider reply could not be read as a content package.",
            ),
            (normalization, _) => {
                let mut message = success_message(outcome);
                if let Normalization::Parsed { substituted } = normalization {
                    if !substituted.is_empty() {
                        message.push_str(" Some fields use sample data.");
                    }
                }
                message.push(' ');
                message.push_str(&credits_phrase(outcome.credits_remaining));
                Self::new(Severity::Success, success_title(outcome.action), message)
            }
        }
    }
}

fn failure_hint(err: &ProviderError) -> &'static str {
    match err {
        ProviderError::Unavailable(_) => {
            "Check your API connection or credentials for AI-powered results."
        }
        ProviderError::RateLimited(_) => "The provider is rate limiting requests. Try again shortly.",
        ProviderError::Timeout(_) => "The provider did not respond in time.",
        ProviderError::InvalidResponse(_) => "The provider returned an unreadable response.",
    }
}

fn success_title(action: GenerationAction) -> &'static str {
    match action {
        GenerationAction::GenerateContent => "Content Generated!",
        GenerationAction::GenerateHooks => "Hooks Generated!",
        GenerationAction::GenerateScript => "Script Generated!",
        GenerationAction::PostingTimes => "Posting Times Ready!",
        GenerationAction::Chat => "Reply Ready!",
    }
}

fn success_message(outcome: &DispatchOutcome) -> String {
    match outcome.action {
        GenerationAction::GenerateContent => {
            "Your AI-powered content package is ready. Review and edit below.".to_string()
        }
        GenerationAction::GenerateHooks => {
            format!("{} hooks created.", outcome.package.hooks.len())
        }
        GenerationAction::GenerateScript => {
            "Your full script is ready. Edit and use the teleprompter.".to_string()
        }
        GenerationAction::PostingTimes => format!(
            "{} posting-time suggestions ready.",
            outcome.package.hooks.len()
        ),
        GenerationAction::Chat => "The assistant has replied.".to_string(),
    }
}

fn credits_phrase(remaining: u32) -> String {
    if remaining == 1 {
        "1 credit remaining.".to_string()
    } else {
        format!("{} credits remaining.", remaining)
    }
}

/// FIFO of transient notifications. No deduplication.
#[derive(Debug)]
pub struct DeliveryChannel {
    notifications: Mutex<VecDeque<Notification>>,
    next_id: AtomicU64,
    ttl: chrono::Duration,
}

impl DeliveryChannel {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

    pub fn new(ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::seconds(5));
        Self {
            notifications: Mutex::new(VecDeque::new()),
            next_id: AtomicU64::new(1),
            ttl,
        }
    }

    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Append a notification created now.
    pub fn notify(&self, draft: NotificationDraft) -> Notification {
        self.notify_at(draft, Utc::now())
    }

    pub fn notify_at(&self, draft: NotificationDraft, now: DateTime<Utc>) -> Notification {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            severity: draft.severity,
            title: draft.title,
            message: draft.message,
            created_at: now,
        };
        debug!(
            id = notification.id,
            severity = notification.severity.as_str(),
            title = %notification.title,
            "Notification queued"
        );
        self.notifications.lock().push_back(notification.clone());
        notification
    }

    /// Map a dispatch result to a notification and queue it.
    pub fn deliver(&self, result: &Result<DispatchOutcome, ApiError>) -> Notification {
        self.notify(NotificationDraft::for_result(result))
    }

    /// Remove one notification. Returns false if it was already gone.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut notifications = self.notifications.lock();
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        notifications.len() != before
    }

    /// Notifications still live at `now`, oldest first.
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<Notification> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.created_at + self.ttl > now)
            .cloned()
            .collect()
    }

    /// Drop notifications whose TTL has passed. Returns how many were removed.
    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut notifications = self.notifications.lock();
        let before = notifications.len();
        notifications.retain(|n| n.created_at + self.ttl > now);
        before - notifications.len()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }
}

impl Default for DeliveryChannel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}
