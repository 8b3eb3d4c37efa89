//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod validate;

use std::path::Path;

use tracing::debug;

use passcan_core::PassCanConfig;

/// Load the config named on the command line, else the user config file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PassCanConfig> {
    if let Some(path) = config_path {
        debug!("Loading config from {}", path);
        return Ok(PassCanConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(PassCanConfig::from_file(&default_path)?)
    } else {
        Ok(PassCanConfig::default())
    }
}
