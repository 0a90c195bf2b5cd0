//! Chart renderer implementations

use freq_charts_shared::{ChartKind, ChartStyle, FrequencyTable, Result, ViewState};

use crate::surface::{Surface, TextAlign, TextBaseline};

/// Trait for all chart renderers
pub trait ChartRenderer {
    /// Render the chart. `view` is `None` when no interaction engine is
    /// attached; renderers may assume a non-empty table, since the owning view
    /// handles the empty state.
    fn render(
        &mut self,
        table: &FrequencyTable,
        surface: &mut dyn Surface,
        view: Option<&ViewState>,
    ) -> Result<()>;

    /// Renderer name for debugging and identification
    fn name(&self) -> &str;

    fn chart_kind(&self) -> ChartKind;
}

/// Title and zoom badge, drawn in screen space after the view transform
/// has been restored.
pub(crate) fn draw_overlays(
    surface: &mut dyn Surface,
    title: &str,
    title_y: f64,
    view: Option<&ViewState>,
    style: &ChartStyle,
) {
    surface.set_font_size(16.0);
    surface.set_fill_color(style.text_color);
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Alphabetic);
    surface.fill_text(title, surface.width() / 2.0, title_y);

    if let Some(view) = view {
        if view.zoom_level != 1.0 {
            let badge = format!("Zoom: {:.0}%", view.zoom_level * 100.0);
            surface.set_font_size(12.0);
            surface.set_text_align(TextAlign::Right);
            surface.fill_text(&badge, surface.width() - 10.0, 18.0);
        }
    }
}

mod bar_chart;
mod pie_chart;

pub use bar_chart::{bar_at, BarChartRenderer, BarLayout, Padding};
pub use pie_chart::{segments, slice_at, ChartSegment, PieChartRenderer};
