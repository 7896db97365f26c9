//! Integration tests for layered configuration loading

use crate::integration::test_utils::with_xdg_env;
use content_studio::config::{global_config_path, ConfigLoader};
use content_studio::error::ApiError;
use content_studio::provider::ProviderType;
use std::time::Duration;
use tempfile::TempDir;

fn write_workspace_config(root: &std::path::Path, body: &str) {
    std::fs::create_dir_all(root.join("config")).unwrap();
    std::fs::write(root.join("config/config.toml"), body).unwrap();
}

#[test]
fn test_defaults_without_any_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config, ConfigLoader::defaults());
        assert_eq!(config.provider.provider_type, ProviderType::Auto);
        assert_eq!(config.credits.period_max, 50);
        assert_eq!(config.dispatch.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.delivery.notification_ttl(), Duration::from_secs(5));
    });
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let global = global_config_path().unwrap();
        std::fs::create_dir_all(global.parent().unwrap()).unwrap();
        std::fs::write(
            &global,
            "[credits]\nperiod_max = 100\n\n[dispatch]\nrequest_timeout_secs = 20\n",
        )
        .unwrap();
        write_workspace_config(workspace.path(), "[credits]\nperiod_max = 25\n");

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.credits.period_max, 25);
        assert_eq!(config.dispatch.request_timeout_secs, 20);
    });
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        write_workspace_config(
            workspace.path(),
            "[provider]\nprovider_type = \"anthropic\"\napi_key = \"file-key\"\n",
        );
        std::env::set_var("STUDIO_PROVIDER__PROVIDER_TYPE", "ollama");
        std::env::set_var("STUDIO_CREDITS__PERIOD_MAX", "7");

        let result = ConfigLoader::load(workspace.path());

        std::env::remove_var("STUDIO_PROVIDER__PROVIDER_TYPE");
        std::env::remove_var("STUDIO_CREDITS__PERIOD_MAX");

        let config = result.unwrap();
        assert_eq!(config.provider.provider_type, ProviderType::Ollama);
        assert_eq!(config.credits.period_max, 7);
        assert_eq!(config.provider.api_key.as_deref(), Some("file-key"));
    });
}

#[test]
fn test_override_file_sits_above_workspace() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        write_workspace_config(workspace.path(), "[delivery]\nnotification_ttl_secs = 9\n");
        let override_path = test_dir.path().join("override.toml");
        std::fs::write(&override_path, "[delivery]\nnotification_ttl_secs = 2\n").unwrap();

        let config =
            ConfigLoader::load_with_override(workspace.path(), Some(&override_path)).unwrap();
        assert_eq!(config.delivery.notification_ttl_secs, 2);
    });
}

#[test]
fn test_invalid_workspace_config_reports_every_section() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        write_workspace_config(
            workspace.path(),
            "[credits]\nperiod_max = 0\n\n[dispatch]\nrequest_timeout_secs = 0\n",
        );
        match ConfigLoader::load(workspace.path()) {
            Err(ApiError::ConfigError(msg)) => {
                assert!(msg.contains("credits"), "{msg}");
                assert!(msg.contains("dispatch"), "{msg}");
            }
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    });
}

#[test]
fn test_session_file_setting_is_honored() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let session = test_dir.path().join("custom-session.json");
        write_workspace_config(
            workspace.path(),
            &format!("[credits]\nsession_file = {:?}\n", session.to_str().unwrap()),
        );
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.session_path(), Some(session));
    });
}
