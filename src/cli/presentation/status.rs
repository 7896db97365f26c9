//! Status command presentation.

use super::shared::{format_section_heading, to_pretty_json};
use crate::api::StatusResponse;
use crate::error::ApiError;
use crate::provider::{provider_type_slug, ProviderConfig};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

pub fn format_status_text(status: &StatusResponse, config: &ProviderConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Provider")));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Configured", "Model", "Available", "Detail"]);
    table.add_row(vec![
        provider_type_slug(config.provider_type).to_string(),
        status.model.clone().unwrap_or_else(|| "-".to_string()),
        if status.available { "yes" } else { "no" }.to_string(),
        status.error.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    out.push_str(&format!("{}\n", table));

    if !status.available {
        out.push_str("\nGeneration still works; results will use sample content.\n");
    }
    out
}

pub fn format_status_json(
    status: &StatusResponse,
    config: &ProviderConfig,
) -> Result<String, ApiError> {
    to_pretty_json(&json!({
        "available": status.available,
        "model": status.model,
        "error": status.error,
        "providerType": provider_type_slug(config.provider_type),
    }))
}
