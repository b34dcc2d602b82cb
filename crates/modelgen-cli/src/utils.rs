use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use modelgen_config::ModelgenConfig;
use tracing_subscriber::EnvFilter;

/// Load the config file at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ModelgenConfig> {
    if !path.exists() {
        return Ok(ModelgenConfig::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: ModelgenConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

/// Default filter directives. The binary's own events use the `modelgen`
/// target.
pub fn tracing_directives(debug: bool) -> &'static str {
    if debug {
        "warn,modelgen=debug,modelgen_schema=debug"
    } else {
        "warn"
    }
}

/// Install the stderr `tracing` subscriber. `RUST_LOG` wins over `debug`.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_directives(debug)));
    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
