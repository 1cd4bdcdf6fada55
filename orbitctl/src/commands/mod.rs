pub mod check;
pub mod project;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};
use orbit_config::{CarouselConfig, ConfigLoad};

/// Load from an explicit path, or fall back to the environment lookup.
pub fn load_config(path: Option<&Path>) -> Result<ConfigLoad> {
    match path {
        Some(path) => CarouselConfig::load_validated(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => CarouselConfig::load_from_env()
            .context("failed to load carousel configuration"),
    }
}
