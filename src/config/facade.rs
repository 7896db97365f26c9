//! Config loading facade: assembles sources in precedence order and validates the result.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::StudioConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace files,
    /// environment.
    pub fn load(workspace_root: &Path) -> Result<StudioConfig, ApiError> {
        Self::load_with_override(workspace_root, None)
    }

    /// Like [`ConfigLoader::load`], with an explicit file layered above the workspace files
    /// and below the environment.
    pub fn load_with_override(
        workspace_root: &Path,
        override_file: Option<&Path>,
    ) -> Result<StudioConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let mut builder = workspace_file::add_to_builder(builder, workspace_root)?;
        if let Some(path) = override_file {
            if !path.exists() {
                return Err(ApiError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).required(true));
        }
        let builder = environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load a single file over the defaults. No global, workspace, or environment layers.
    pub fn load_from_file(path: &Path) -> Result<StudioConfig, ApiError> {
        let builder =
            merge_policy::builder_with_defaults()?.add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    /// Built-in defaults only.
    pub fn defaults() -> StudioConfig {
        StudioConfig::default()
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<StudioConfig, ApiError> {
        let config: StudioConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
