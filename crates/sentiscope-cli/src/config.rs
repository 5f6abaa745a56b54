//! Configuration loading with command-line overrides

use sentiscope_analyzer::AnalyzerConfig;
use std::path::Path;

use crate::cli::RemoteArgs;

/// Load configuration from file (defaults if absent) and apply CLI/env overrides
pub fn load(config_path: &Path, overrides: &RemoteArgs) -> anyhow::Result<AnalyzerConfig> {
    let mut config = AnalyzerConfig::load(config_path)?;
    apply_overrides(&mut config, overrides);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut AnalyzerConfig, overrides: &RemoteArgs) {
    if let Some(api_key) = &overrides.api_key {
        config.remote.api_key = Some(api_key.clone());
    }

    if let Some(model) = &overrides.model {
        config.remote.model = model.clone();
    }

    if let Some(base_url) = &overrides.base_url {
        config.remote.base_url = base_url.clone();
    }

    if let Some(use_remote) = overrides.use_remote {
        config.use_remote = use_remote;
    }
}
