//! CLI presentation: text and json formatters per command family.

mod credits;
mod generation;
mod shared;
mod status;

pub use credits::{format_credits_json, format_credits_text};
pub use generation::{format_generation_json, format_generation_text};
pub use shared::{format_notification_line, format_section_heading};
pub use status::{format_status_json, format_status_text};
