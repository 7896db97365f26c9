//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::api::{GenerationRequest, StatusResponse, StudioApi};
use crate::cli::parse::{Commands, CreditsCommands};
use crate::cli::presentation::{
    format_credits_json, format_credits_text, format_generation_json, format_generation_text,
    format_status_json, format_status_text,
};
use crate::config::{ConfigLoader, StudioConfig};
use crate::error::ApiError;
use crate::provider::ProviderFactory;
use crate::session::SessionStore;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format.trim().to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::ConfigError(format!(
            "Invalid format: '{}'. Must be 'text' or 'json'",
            other
        ))),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Runtime context for CLI execution: workspace root and the loaded config.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    config: StudioConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_with_override(&workspace_root, config_path.as_deref())?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(Self {
            config,
            workspace_root,
        })
    }

    /// Context over an already loaded config.
    pub fn with_config(workspace_root: PathBuf, config: StudioConfig) -> Self {
        Self {
            config,
            workspace_root,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                action,
                topic,
                platform,
                content_type,
                tone,
                audience,
                context,
                niche,
                count,
                target_length,
                style,
                format,
            } => {
                let format = parse_format(format)?;
                let request = GenerationRequest {
                    action: action.clone(),
                    platform: non_empty(platform),
                    content_type: non_empty(content_type),
                    topic: Some(topic.clone()),
                    niche: non_empty(niche),
                    count: *count,
                    target_length: target_length.clone(),
                    style: style.clone(),
                    tone: tone.clone(),
                    audience: audience.clone(),
                    context: context.clone(),
                    message: None,
                };
                self.handle_generate(&request, format)
            }
            Commands::Status { format } => self.handle_status(parse_format(format)?),
            Commands::Credits { command } => match command {
                CreditsCommands::Show { format } => self.handle_credits_show(parse_format(format)?),
                CreditsCommands::Reset { max, format } => {
                    self.handle_credits_reset(*max, parse_format(format)?)
                }
            },
        }
    }

    fn handle_generate(
        &self,
        request: &GenerationRequest,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let api = StudioApi::from_config(&self.config)?;
        let runtime = Runtime::new()?;
        let (result, notification) = runtime.block_on(api.handle(request));
        let outcome = result?;
        match format {
            OutputFormat::Text => Ok(format_generation_text(&outcome, &notification)),
            OutputFormat::Json => format_generation_json(outcome, notification),
        }
    }

    fn handle_status(&self, format: OutputFormat) -> Result<String, ApiError> {
        let status = match ProviderFactory::create_adapter(&self.config.provider) {
            Ok(adapter) => {
                let runtime = Runtime::new()?;
                runtime.block_on(adapter.status())
            }
            Err(ApiError::ProviderNotConfigured(msg)) => StatusResponse {
                available: false,
                model: None,
                error: Some(msg),
            },
            Err(e) => return Err(e),
        };
        match format {
            OutputFormat::Text => Ok(format_status_text(&status, &self.config.provider)),
            OutputFormat::Json => format_status_json(&status, &self.config.provider),
        }
    }

    fn handle_credits_show(&self, format: OutputFormat) -> Result<String, ApiError> {
        let store = SessionStore::from_config(&self.config)?;
        let account = store.meter().snapshot();
        match format {
            OutputFormat::Text => Ok(format_credits_text(&account, store.path())),
            OutputFormat::Json => format_credits_json(&account, store.path()),
        }
    }

    fn handle_credits_reset(
        &self,
        max: Option<u32>,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let period_max = max.unwrap_or(self.config.credits.period_max);
        let store = SessionStore::from_config(&self.config)?;
        let account = store.reset(period_max)?;
        info!(period_max, "Credit period reset");
        match format {
            OutputFormat::Text => Ok(format_credits_text(&account, store.path())),
            OutputFormat::Json => format_credits_json(&account, store.path()),
        }
    }
}
