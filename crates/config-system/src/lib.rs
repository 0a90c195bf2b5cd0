//! Configuration system for freq-charts
//! Manages chart presets, interaction options and validation

use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub mod parser;
pub mod presets;
pub mod validation;

pub use presets::ConfigPreset;
pub use validation::{ConfigValidator, ValidationReport};

use freq_charts_renderer::summary::SortMethod;
use freq_charts_shared::{ChartKind, ChartStyle, Error, InteractionOptions, Result};

/// Complete configuration for one analyzer session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartsConfig {
    /// Chart kind selected before the user toggles anything
    pub default_chart: ChartKind,
    pub summary_sort: SortMethod,
    pub interaction: InteractionOptions,
    pub style: ChartStyle,
}

/// Shared configuration holder.
///
/// Readers take a cheap snapshot; updates validate before replacing the
/// current configuration.
pub struct ConfigSystem {
    current: RwLock<ChartsConfig>,
}

impl Default for ConfigSystem {
    fn default() -> Self {
        Self::new(ChartsConfig::default())
    }
}

impl ConfigSystem {
    pub fn new(config: ChartsConfig) -> Self {
        Self {
            current: RwLock::new(config),
        }
    }

    /// Snapshot of the current configuration.
    pub fn current(&self) -> ChartsConfig {
        self.current.read().clone()
    }

    /// Validate and install a new configuration.
    pub fn update(&self, config: ChartsConfig) -> Result<()> {
        let report = ConfigValidator::validate(&config);
        for warning in &report.warnings {
            log::warn!("config: {warning}");
        }
        if !report.is_valid {
            return Err(Error::invalid_config(report.errors.join("; ")));
        }
        *self.current.write() = config;
        Ok(())
    }

    /// Parse, validate and install a configuration file.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let config = parser::parse_file(path.as_ref())?;
        self.update(config)
    }
}
