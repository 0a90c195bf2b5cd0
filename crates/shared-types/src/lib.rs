//! Shared types for the freq-charts architecture
//!
//! This crate contains all types that are shared between the data-manager,
//! renderer, and config-system crates: the frequency table produced by the
//! aggregator, the view state owned by the interaction engine, input events,
//! and the common error type.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod events;
pub mod tooltip;
pub mod view_state;

pub use errors::{Error, Result};
pub use view_state::{InteractionOptions, ViewState};

/// Chart types supported by the renderer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    #[default]
    Bar,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

/// One loaded file's identity and parsed content.
///
/// Created per file read and owned by a single aggregation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedDocument {
    pub name: String,
    pub data: serde_json::Value,
}

impl ParsedDocument {
    pub fn new(name: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Ordered label → value mapping produced by the aggregator.
///
/// Labels appear in discovery order; consumers re-sort before display.
/// Values only ever receive additive contributions; a fresh table is
/// produced on every aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: IndexMap<String, f64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(label).copied()
    }

    /// Count one occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        self.add(label, 1.0);
    }

    /// Add a metric contribution to `label`.
    pub fn add(&mut self, label: &str, amount: f64) {
        if let Some(value) = self.entries.get_mut(label) {
            *value += amount;
        } else {
            self.entries.insert(label.to_string(), amount);
        }
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Element-wise addition over the union of both label sets.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (label, value) in other.iter() {
            self.add(label, value);
        }
    }

    /// Entries sorted descending by value; ties keep discovery order.
    pub fn sorted_by_value_desc(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Entries sorted lexicographically by label.
    pub fn sorted_by_key(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(String, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (label, value) in iter {
            table.add(&label, value);
        }
        table
    }
}

/// Display helper for table values: integral values print without a
/// fractional part, everything else prints as-is.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Visual style shared by the chart renderers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartStyle {
    pub background_color: [f32; 4],
    pub text_color: [f32; 4],
    pub grid_color: [f32; 4],
    pub axis_color: [f32; 4],
    /// Smallest share of the total that still gets an in-slice label
    pub pie_label_min_share: f64,
    /// Zoom level past which even small slices get labels
    pub pie_label_zoom_threshold: f64,
    /// Bars shorter than this draw no value label (px)
    pub bar_value_label_min_height: f64,
    /// Axis labels longer than this are truncated with an ellipsis
    pub bar_axis_label_max_chars: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            text_color: [1.0, 1.0, 1.0, 1.0],
            grid_color: [1.0, 1.0, 1.0, 0.1],
            axis_color: [0.33, 0.33, 0.33, 1.0],
            pie_label_min_share: 0.05,
            pie_label_zoom_threshold: 1.5,
            bar_value_label_min_height: 20.0,
            bar_axis_label_max_chars: 30,
        }
    }
}
