//! Bar chart renderer

use std::f64::consts::PI;

use freq_charts_shared::{
    format_value, ChartKind, ChartStyle, Error, FrequencyTable, Result, ViewState,
};

use crate::chart_renderers::{draw_overlays, ChartRenderer};
use crate::colors::chart_palette;
use crate::surface::{Surface, TextAlign, TextBaseline};
use crate::transform::apply_view_transform;

/// Gridline count on the value axis
const Y_TICK_COUNT: usize = 5;

/// Widest gap allowed between bars (px)
const MAX_BAR_SPACING: f64 = 20.0;

/// Fixed chart padding (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 20.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

/// Computed bar geometry for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub padding: Padding,
    pub chart_width: f64,
    pub chart_height: f64,
    pub bar_width: f64,
    pub bar_spacing: f64,
    pub max_value: f64,
}

impl BarLayout {
    /// Layout for `count` bars on a surface of the given size.
    pub fn compute(
        surface_width: f64,
        surface_height: f64,
        count: usize,
        max_value: f64,
    ) -> Result<Self> {
        if count == 0 || max_value <= 0.0 {
            return Err(Error::render("bar chart requires a positive maximum"));
        }

        let padding = Padding::default();
        let chart_width = surface_width - padding.left - padding.right;
        let chart_height = surface_height - padding.top - padding.bottom;
        let bar_spacing = (chart_width / (count as f64 * 2.0)).min(MAX_BAR_SPACING);
        let bar_width = (chart_width - bar_spacing * (count as f64 + 1.0)) / count as f64;

        Ok(Self {
            padding,
            chart_width,
            chart_height,
            bar_width,
            bar_spacing,
            max_value,
        })
    }

    pub fn bar_height(&self, value: f64) -> f64 {
        value / self.max_value * self.chart_height
    }

    /// Left edge of the bar at `index`.
    pub fn bar_x(&self, index: usize) -> f64 {
        self.padding.left + self.bar_spacing + index as f64 * (self.bar_width + self.bar_spacing)
    }
}

/// Find the bar whose horizontal span contains `x`, if any.
pub fn bar_at(layout: &BarLayout, count: usize, x: f64) -> Option<usize> {
    (0..count).find(|&index| {
        let left = layout.bar_x(index);
        x >= left && x <= left + layout.bar_width
    })
}

pub struct BarChartRenderer {
    style: ChartStyle,
}

impl BarChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}

impl Default for BarChartRenderer {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

impl ChartRenderer for BarChartRenderer {
    fn render(
        &mut self,
        table: &FrequencyTable,
        surface: &mut dyn Surface,
        view: Option<&ViewState>,
    ) -> Result<()> {
        let entries = table.sorted_by_value_desc();
        let max_value = entries.first().map(|(_, value)| *value).unwrap_or(0.0);
        let layout = BarLayout::compute(surface.width(), surface.height(), entries.len(), max_value)?;
        let colors = chart_palette(entries.len(), ChartKind::Bar);
        let height = surface.height();

        surface.clear();

        if let Some(view) = view {
            let mut guard = apply_view_transform(surface, view);
            draw_chart(&mut *guard, &entries, &layout, &colors, height, &self.style);
        } else {
            draw_chart(surface, &entries, &layout, &colors, height, &self.style);
        }

        draw_overlays(
            surface,
            "Bar Chart",
            layout.padding.top / 2.0,
            view,
            &self.style,
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "bar"
    }

    fn chart_kind(&self) -> ChartKind {
        ChartKind::Bar
    }
}

fn draw_chart(
    surface: &mut dyn Surface,
    entries: &[(&str, f64)],
    layout: &BarLayout,
    colors: &[[f32; 4]],
    height: f64,
    style: &ChartStyle,
) {
    let baseline_y = height - layout.padding.bottom;
    let right_edge = layout.padding.left + layout.chart_width;

    // Axes
    surface.set_stroke_color(style.axis_color);
    surface.set_line_width(1.0);
    surface.begin_path();
    surface.move_to(layout.padding.left, layout.padding.top);
    surface.line_to(layout.padding.left, baseline_y);
    surface.stroke();
    surface.begin_path();
    surface.move_to(layout.padding.left, baseline_y);
    surface.line_to(right_edge, baseline_y);
    surface.stroke();

    // Gridlines and tick labels
    let tick_step = layout.max_value / Y_TICK_COUNT as f64;
    for tick in 0..=Y_TICK_COUNT {
        let value = tick as f64 * tick_step;
        let y = baseline_y - tick as f64 * layout.chart_height / Y_TICK_COUNT as f64;

        surface.set_stroke_color(style.grid_color);
        surface.begin_path();
        surface.move_to(layout.padding.left, y);
        surface.line_to(right_edge, y);
        surface.stroke();

        surface.set_font_size(12.0);
        surface.set_fill_color(style.text_color);
        surface.set_text_align(TextAlign::Right);
        surface.set_text_baseline(TextBaseline::Middle);
        surface.fill_text(&format!("{}", value.round()), layout.padding.left - 10.0, y);
    }

    // Bars, value labels, rotated axis labels
    for (index, (label, value)) in entries.iter().enumerate() {
        let bar_height = layout.bar_height(*value);
        let x = layout.bar_x(index);
        let y = baseline_y - bar_height;

        surface.set_fill_color(colors[index % colors.len()]);
        surface.fill_rect(x, y, layout.bar_width, bar_height);

        if bar_height > style.bar_value_label_min_height {
            surface.set_font_size(12.0);
            surface.set_fill_color(style.text_color);
            surface.set_text_align(TextAlign::Center);
            surface.set_text_baseline(TextBaseline::Bottom);
            surface.fill_text(&format_value(*value), x + layout.bar_width / 2.0, y - 5.0);
        }

        surface.save();
        surface.translate(x + layout.bar_width / 2.0, baseline_y + 10.0);
        surface.rotate(PI / 4.0);
        surface.set_font_size(12.0);
        surface.set_fill_color(style.text_color);
        surface.set_text_align(TextAlign::Left);
        surface.set_text_baseline(TextBaseline::Top);
        surface.fill_text(&truncate_label(label, style.bar_axis_label_max_chars), 0.0, 0.0);
        surface.restore();
    }
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let head: String = label.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}
