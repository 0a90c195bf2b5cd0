//! Configuration validation with errors and warnings

use serde::{Deserialize, Serialize};

use crate::ChartsConfig;

/// Validation outcome: errors block installation, warnings are logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &ChartsConfig) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let interaction = &config.interaction;
        if !interaction.min_zoom.is_finite() || interaction.min_zoom <= 0.0 {
            errors.push(format!("min_zoom must be positive, got {}", interaction.min_zoom));
        }
        if interaction.max_zoom < interaction.min_zoom {
            errors.push(format!(
                "max_zoom {} below min_zoom {}",
                interaction.max_zoom, interaction.min_zoom
            ));
        }
        if interaction.wheel_zoom_in <= 1.0 {
            errors.push(format!(
                "wheel_zoom_in must exceed 1.0, got {}",
                interaction.wheel_zoom_in
            ));
        }
        if interaction.wheel_zoom_out <= 0.0 || interaction.wheel_zoom_out >= 1.0 {
            errors.push(format!(
                "wheel_zoom_out must sit in (0, 1), got {}",
                interaction.wheel_zoom_out
            ));
        }
        if interaction.button_zoom_step <= 1.0 {
            errors.push(format!(
                "button_zoom_step must exceed 1.0, got {}",
                interaction.button_zoom_step
            ));
        }
        if interaction.max_zoom > 20.0 {
            warnings.push(format!(
                "max_zoom {} is very deep; labels may degenerate",
                interaction.max_zoom
            ));
        }

        let style = &config.style;
        for (name, color) in [
            ("background_color", &style.background_color),
            ("text_color", &style.text_color),
            ("grid_color", &style.grid_color),
            ("axis_color", &style.axis_color),
        ] {
            for component in color.iter() {
                if !component.is_finite() || *component < 0.0 || *component > 1.0 {
                    errors.push(format!("{name} components must sit in [0, 1]"));
                    break;
                }
            }
        }

        if !(0.0..=1.0).contains(&style.pie_label_min_share) {
            errors.push(format!(
                "pie_label_min_share must sit in [0, 1], got {}",
                style.pie_label_min_share
            ));
        }
        if style.pie_label_zoom_threshold <= 0.0 {
            errors.push(format!(
                "pie_label_zoom_threshold must be positive, got {}",
                style.pie_label_zoom_threshold
            ));
        }
        if style.bar_value_label_min_height < 0.0 {
            errors.push(format!(
                "bar_value_label_min_height must be non-negative, got {}",
                style.bar_value_label_min_height
            ));
        }
        if style.bar_axis_label_max_chars < 8 {
            warnings.push(format!(
                "bar_axis_label_max_chars {} truncates aggressively",
                style.bar_axis_label_max_chars
            ));
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
