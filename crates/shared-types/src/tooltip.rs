//! Tooltip state for chart hover readouts
//!
//! Each chart view owns one tooltip state; there is no shared registry.

use serde::{Deserialize, Serialize};

/// Represents the state of one view's tooltip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipState {
    /// Whether the tooltip is currently visible
    pub active: bool,

    /// X position in screen space (pixels from left)
    pub x_position: f64,

    /// Y position in screen space (pixels from top)
    pub y_position: f64,

    /// Entries to display, top to bottom
    pub entries: Vec<TooltipEntry>,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            active: false,
            x_position: 0.0,
            y_position: 0.0,
            entries: Vec::new(),
        }
    }
}

impl TooltipState {
    /// Show the tooltip at a screen position with fresh content.
    pub fn show(&mut self, x: f64, y: f64, entries: Vec<TooltipEntry>) {
        self.active = true;
        self.x_position = x;
        self.y_position = y;
        self.entries = entries;
    }

    pub fn hide(&mut self) {
        self.active = false;
        self.entries.clear();
    }
}

/// One line of tooltip content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipEntry {
    pub label: String,
    pub value: f64,
    /// Share of the table total, 0–100
    pub percent: f64,
    /// Swatch color (RGBA, each 0–1)
    pub color: [f32; 4],
}

/// Configuration for tooltip presentation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TooltipConfig {
    /// Label font size in pixels
    pub font_size: f64,

    /// Padding inside the tooltip box in pixels
    pub box_padding: f64,

    /// Opacity of the tooltip background (0-1)
    pub background_opacity: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            box_padding: 4.0,
            background_opacity: 0.9,
        }
    }
}
