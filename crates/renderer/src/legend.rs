//! Color-keyed legend entries

use serde::{Deserialize, Serialize};

use freq_charts_shared::{ChartKind, FrequencyTable};

use crate::colors::chart_palette;

/// Bar legends cap their entry count; the remainder collapses into an
/// overflow marker.
pub const MAX_BAR_LEGEND_ITEMS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub value: f64,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    /// Number of entries hidden behind the "+ N more items" marker
    pub overflow: usize,
}

impl Legend {
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+ {} more items", self.overflow))
    }
}

/// Legend entries in descending-value order, colored like the chart.
pub fn build_legend(table: &FrequencyTable, kind: ChartKind) -> Legend {
    let entries = table.sorted_by_value_desc();
    let colors = chart_palette(entries.len(), kind);

    let limit = match kind {
        ChartKind::Bar => MAX_BAR_LEGEND_ITEMS,
        ChartKind::Pie => entries.len(),
    };
    let shown = entries.len().min(limit);
    let overflow = entries.len() - shown;

    Legend {
        entries: entries
            .into_iter()
            .take(shown)
            .enumerate()
            .map(|(index, (label, value))| LegendEntry {
                label: label.to_string(),
                value,
                color: colors[index % colors.len()],
            })
            .collect(),
        overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(count: usize) -> FrequencyTable {
        (0..count)
            .map(|index| (format!("label-{index}"), (count - index) as f64))
            .collect()
    }

    #[test]
    fn test_legend_matches_chart_colors_and_order() {
        let data = table(4);
        let legend = build_legend(&data, ChartKind::Pie);
        let palette = chart_palette(4, ChartKind::Pie);

        assert_eq!(legend.entries.len(), 4);
        assert_eq!(legend.entries[0].label, "label-0");
        assert_eq!(legend.entries[0].color, palette[0]);
        assert!(legend.overflow_label().is_none());
    }

    #[test]
    fn test_bar_legend_caps_at_fifteen() {
        let data = table(20);
        let legend = build_legend(&data, ChartKind::Bar);

        assert_eq!(legend.entries.len(), MAX_BAR_LEGEND_ITEMS);
        assert_eq!(legend.overflow, 5);
        assert_eq!(legend.overflow_label().unwrap(), "+ 5 more items");
    }

    #[test]
    fn test_pie_legend_is_uncapped() {
        let data = table(20);
        let legend = build_legend(&data, ChartKind::Pie);
        assert_eq!(legend.entries.len(), 20);
        assert_eq!(legend.overflow, 0);
    }
}
