//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
/// Later sources override these key by key; tables are merged, not replaced.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("provider.provider_type", "auto")?
        .set_default("credits.period_max", 50)?
        .set_default("dispatch.request_timeout_secs", 60)?
        .set_default("delivery.notification_ttl_secs", 5)
}
