//! Built-in configuration presets

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use freq_charts_shared::ChartKind;

use crate::ChartsConfig;

/// A named, ready-made configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigPreset {
    pub name: String,
    pub description: String,
    pub config: ChartsConfig,
}

static PRESETS: Lazy<Vec<ConfigPreset>> = Lazy::new(|| {
    let default = ChartsConfig::default();

    let mut presentation = ChartsConfig::default();
    presentation.default_chart = ChartKind::Pie;
    presentation.interaction.max_zoom = 8.0;
    presentation.style.pie_label_min_share = 0.03;

    let mut compact = ChartsConfig::default();
    compact.interaction.max_zoom = 3.0;
    compact.style.bar_axis_label_max_chars = 16;
    compact.style.bar_value_label_min_height = 14.0;

    vec![
        ConfigPreset {
            name: "default".to_string(),
            description: "Balanced defaults for interactive analysis".to_string(),
            config: default,
        },
        ConfigPreset {
            name: "presentation".to_string(),
            description: "Pie-first with deep zoom and eager slice labels".to_string(),
            config: presentation,
        },
        ConfigPreset {
            name: "compact".to_string(),
            description: "Tight labels for small embedded charts".to_string(),
            config: compact,
        },
    ]
});

/// All built-in presets.
pub fn all() -> &'static [ConfigPreset] {
    &PRESETS
}

pub fn find(name: &str) -> Option<&'static ConfigPreset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.name.as_str()).collect()
}
