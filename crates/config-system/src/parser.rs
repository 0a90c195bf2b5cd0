//! Configuration parsing from TOML and JSON sources

use std::path::Path;

use freq_charts_shared::{Error, Result};

use crate::ChartsConfig;

/// Parse a configuration file, choosing the format by extension.
/// Unknown extensions fall back to TOML.
pub fn parse_file(path: &Path) -> Result<ChartsConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|error| Error::file_read(path.display().to_string(), error.to_string()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_str(&raw),
        _ => from_toml_str(&raw),
    }
}

pub fn from_toml_str(raw: &str) -> Result<ChartsConfig> {
    toml::from_str(raw).map_err(|error| Error::invalid_config(error.to_string()))
}

pub fn from_json_str(raw: &str) -> Result<ChartsConfig> {
    serde_json::from_str(raw).map_err(|error| Error::invalid_config(error.to_string()))
}
