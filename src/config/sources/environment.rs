//! Environment source: `STUDIO_<SECTION>__<KEY>`, e.g. `STUDIO_CREDITS__PERIOD_MAX=20`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("STUDIO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
