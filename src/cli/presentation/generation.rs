//! Generate command presentation: the content package as text or json.

use super::shared::{format_notification_line, format_section_heading, to_pretty_json};
use crate::api::GenerationResponse;
use crate::brief::GenerationAction;
use crate::delivery::Notification;
use crate::dispatch::DispatchOutcome;
use crate::error::ApiError;
use crate::normalizer::Normalization;

fn hooks_heading(action: GenerationAction) -> &'static str {
    match action {
        GenerationAction::PostingTimes => "Posting Times",
        _ => "Hooks",
    }
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(&format!("{}\n", format_section_heading(heading)));
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", i + 1, item));
    }
    out.push('\n');
}

fn push_block(out: &mut String, heading: &str, text: &str) {
    out.push_str(&format!("{}\n", format_section_heading(heading)));
    for line in text.lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out.push('\n');
}

pub fn format_generation_text(outcome: &DispatchOutcome, notification: &Notification) -> String {
    let package = &outcome.package;
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_notification_line(notification)));

    match outcome.action {
        GenerationAction::Chat | GenerationAction::GenerateScript
            if outcome.normalization == Normalization::Salvaged =>
        {
            push_block(&mut out, "Script", &package.script);
        }
        _ => {
            push_list(&mut out, hooks_heading(outcome.action), &package.hooks);
            push_block(&mut out, "Script", &package.script);
            push_block(&mut out, "Caption", &package.caption);
            out.push_str(&format!("{}\n", format_section_heading("Hashtags")));
            out.push_str(&format!("  {}\n\n", package.hashtags.join(" ")));
            push_list(&mut out, "B-Roll", &package.b_roll_list);
            push_block(&mut out, "Thumbnail Concept", &package.thumbnail_concept);
        }
    }

    out.push_str(&format!("Credits remaining: {}", outcome.credits_remaining));
    out
}

pub fn format_generation_json(
    outcome: DispatchOutcome,
    notification: Notification,
) -> Result<String, ApiError> {
    to_pretty_json(&GenerationResponse::from_result(Ok(outcome), notification))
}
