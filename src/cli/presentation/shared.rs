//! Shared presentation: headings and severity-colored notification lines.

use crate::delivery::{Notification, Severity};
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One-line notification, colored by severity.
pub fn format_notification_line(notification: &Notification) -> String {
    let title = match notification.severity {
        Severity::Success => format!("{}", notification.title.green().bold()),
        Severity::Info => format!("{}", notification.title.cyan().bold()),
        Severity::Warning => format!("{}", notification.title.yellow().bold()),
        Severity::Error => format!("{}", notification.title.red().bold()),
    };
    format!("{} {}", title, notification.message)
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(
    value: &T,
) -> Result<String, crate::error::ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        crate::error::ApiError::ConfigError(format!("Failed to serialize output: {}", e))
    })
}
