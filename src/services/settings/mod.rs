// Settings service
// Loads and validates picker configuration files

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::models::settings::PickerConfig;

/// Read a TOML picker configuration and validate it.
pub fn load_config(path: &Path) -> Result<PickerConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read picker config from {}", path.display()))?;
    parse_config(&data).with_context(|| format!("invalid picker config in {}", path.display()))
}

pub fn parse_config(data: &str) -> Result<PickerConfig> {
    let config: PickerConfig = toml::from_str(data).context("failed to parse picker config")?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    Ok(config)
}
