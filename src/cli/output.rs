//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::delivery::NotificationDraft;
use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
/// Rejections read the same way their notifications do.
pub fn map_error(e: &ApiError) -> String {
    if e.is_pre_dispatch_rejection() {
        let draft = NotificationDraft::for_error(e);
        format!("{}: {}", draft.title, draft.message)
    } else {
        e.to_string()
    }
}
