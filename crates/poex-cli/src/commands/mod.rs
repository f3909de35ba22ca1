//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use poex_core::models::PoexConfig;

/// Load the pipeline configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PoexConfig> {
    match config_path {
        Some(path) => Ok(PoexConfig::from_file(std::path::Path::new(path))?),
        None => Ok(PoexConfig::default()),
    }
}
