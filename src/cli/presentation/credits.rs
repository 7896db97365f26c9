//! Credits command presentation.

use super::shared::{format_section_heading, to_pretty_json};
use crate::error::ApiError;
use crate::meter::CreditAccount;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub fn format_credits_text(account: &CreditAccount, session_file: Option<&Path>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Credits")));

    let balance = if account.balance == 0 {
        format!("{}", account.balance.red().bold())
    } else {
        account.balance.to_string()
    };

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Remaining", "Period max", "Session file"]);
    table.add_row(vec![
        balance,
        account.period_max.to_string(),
        session_file
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(in memory)".to_string()),
    ]);
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_credits_json(
    account: &CreditAccount,
    session_file: Option<&Path>,
) -> Result<String, ApiError> {
    to_pretty_json(&json!({
        "balance": account.balance,
        "periodMax": account.period_max,
        "sessionFile": session_file.map(|p| p.display().to_string()),
    }))
}
