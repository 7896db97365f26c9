//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, CreditsCommands};
pub use presentation::{
    format_credits_json, format_credits_text, format_generation_json, format_generation_text,
    format_notification_line, format_section_heading, format_status_json, format_status_text,
};
pub use route::RunContext;
