//! Zoom/pan view state owned by one interaction engine instance

use serde::{Deserialize, Serialize};

use crate::events::PhysicalPosition;
use crate::ChartKind;

/// Default zoom bounds applied when the embedder does not override them
pub const DEFAULT_MIN_ZOOM: f64 = 0.5;
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;

/// Multiplicative wheel factors: scrolling down zooms out, up zooms in
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Step applied by the explicit zoom-in/zoom-out controls
pub const BUTTON_ZOOM_STEP: f64 = 1.2;

/// Options for constructing an interaction engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionOptions {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    pub button_zoom_step: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            button_zoom_step: BUTTON_ZOOM_STEP,
        }
    }
}

/// View transform and gesture flags for one chart surface.
///
/// Mutated only by the owning interaction engine and read by the paired
/// renderer invocation. The zoom invariant `min_zoom ≤ zoom_level ≤
/// max_zoom` is enforced at every mutation site, never only at read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub zoom_level: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub is_dragging: bool,
    pub is_pinching: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub chart_kind: ChartKind,
}

/// View state validation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ViewState {
    /// Identity view for a fresh engine.
    pub fn new(chart_kind: ChartKind, options: &InteractionOptions) -> Self {
        Self {
            zoom_level: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            is_dragging: false,
            is_pinching: false,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            chart_kind,
        }
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    pub fn is_identity(&self) -> bool {
        self.zoom_level == 1.0 && self.offset_x == 0.0 && self.offset_y == 0.0
    }

    /// Map a surface-local point into content space.
    pub fn screen_to_content(&self, point: PhysicalPosition) -> PhysicalPosition {
        PhysicalPosition::new(
            (point.x - self.offset_x) / self.zoom_level,
            (point.y - self.offset_y) / self.zoom_level,
        )
    }

    /// Map a content-space point onto the surface.
    pub fn content_to_screen(&self, point: PhysicalPosition) -> PhysicalPosition {
        PhysicalPosition::new(
            point.x * self.zoom_level + self.offset_x,
            point.y * self.zoom_level + self.offset_y,
        )
    }

    /// Validate the view state structure and data
    pub fn validate(&self) -> ViewValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !self.zoom_level.is_finite() || !self.offset_x.is_finite() || !self.offset_y.is_finite()
        {
            errors.push("View transform contains non-finite components".to_string());
        }

        if self.min_zoom <= 0.0 {
            errors.push(format!("Invalid min zoom: {}", self.min_zoom));
        }

        if self.min_zoom > self.max_zoom {
            errors.push(format!(
                "Invalid zoom bounds: min {} > max {}",
                self.min_zoom, self.max_zoom
            ));
        }

        if self.zoom_level < self.min_zoom || self.zoom_level > self.max_zoom {
            errors.push(format!(
                "Zoom level {} outside bounds [{}, {}]",
                self.zoom_level, self.min_zoom, self.max_zoom
            ));
        }

        if self.offset_x.abs() > 1.0e6 || self.offset_y.abs() > 1.0e6 {
            warnings.push(format!(
                "View offset very large: ({}, {})",
                self.offset_x, self.offset_y
            ));
        }

        ViewValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
