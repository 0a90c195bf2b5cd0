//! Pie chart renderer

use std::f64::consts::PI;

use freq_charts_shared::events::PhysicalPosition;
use freq_charts_shared::{ChartKind, ChartStyle, Error, FrequencyTable, Result, ViewState};

use crate::chart_renderers::{draw_overlays, ChartRenderer};
use crate::colors::chart_palette;
use crate::surface::{Surface, TextAlign, TextBaseline};
use crate::transform::apply_view_transform;

/// Share of the half-extent used as the pie radius
const RADIUS_SCALE: f64 = 0.8;

/// Labels sit at this fraction of the radius along the slice bisector
const LABEL_RADIUS_SCALE: f64 = 0.7;

/// One slice's derived geometry, recomputed every render pass
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: [f32; 4],
}

/// Slice geometry for a table: sorted descending by value, starting at
/// 12 o'clock and proceeding clockwise.
pub fn segments(table: &FrequencyTable) -> Result<Vec<ChartSegment>> {
    let total = table.total();
    if total <= 0.0 {
        return Err(Error::render("pie chart requires a positive total"));
    }

    let entries = table.sorted_by_value_desc();
    let colors = chart_palette(entries.len(), ChartKind::Pie);

    let mut result = Vec::with_capacity(entries.len());
    let mut start_angle = -PI / 2.0;
    for (index, (label, value)) in entries.into_iter().enumerate() {
        let end_angle = start_angle + value / total * 2.0 * PI;
        result.push(ChartSegment {
            label: label.to_string(),
            value,
            start_angle,
            end_angle,
            color: colors[index % colors.len()],
        });
        start_angle = end_angle;
    }
    Ok(result)
}

/// Find the segment under a content-space point, if any.
pub fn slice_at(
    segments: &[ChartSegment],
    point: PhysicalPosition,
    center: PhysicalPosition,
    radius: f64,
) -> Option<usize> {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    if dx.hypot(dy) > radius {
        return None;
    }

    // Slices span [-π/2, 3π/2); shift atan2's output into that range.
    let mut angle = dy.atan2(dx);
    if angle < -PI / 2.0 {
        angle += 2.0 * PI;
    }
    segments
        .iter()
        .position(|segment| angle >= segment.start_angle && angle < segment.end_angle)
}

pub struct PieChartRenderer {
    style: ChartStyle,
}

impl PieChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}

impl Default for PieChartRenderer {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

impl ChartRenderer for PieChartRenderer {
    fn render(
        &mut self,
        table: &FrequencyTable,
        surface: &mut dyn Surface,
        view: Option<&ViewState>,
    ) -> Result<()> {
        let segments = segments(table)?;
        let total = table.total();
        let zoom = view.map(|v| v.zoom_level).unwrap_or(1.0);

        surface.clear();

        if let Some(view) = view {
            let mut guard = apply_view_transform(surface, view);
            draw_slices(&mut *guard, &segments, total, zoom, &self.style);
        } else {
            draw_slices(surface, &segments, total, zoom, &self.style);
        }

        draw_overlays(surface, "Pie Chart", 25.0, view, &self.style);
        Ok(())
    }

    fn name(&self) -> &str {
        "pie"
    }

    fn chart_kind(&self) -> ChartKind {
        ChartKind::Pie
    }
}

fn draw_slices(
    surface: &mut dyn Surface,
    segments: &[ChartSegment],
    total: f64,
    zoom: f64,
    style: &ChartStyle,
) {
    let center_x = surface.width() / 2.0;
    let center_y = surface.height() / 2.0;
    let radius = center_x.min(center_y) * RADIUS_SCALE;

    for segment in segments {
        surface.begin_path();
        surface.move_to(center_x, center_y);
        surface.arc(
            center_x,
            center_y,
            radius,
            segment.start_angle,
            segment.end_angle,
        );
        surface.close_path();
        surface.set_fill_color(segment.color);
        surface.fill();

        let share = segment.value / total;
        if share >= style.pie_label_min_share || zoom > style.pie_label_zoom_threshold {
            let middle = (segment.start_angle + segment.end_angle) / 2.0;
            let label_x = center_x + middle.cos() * radius * LABEL_RADIUS_SCALE;
            let label_y = center_y + middle.sin() * radius * LABEL_RADIUS_SCALE;

            surface.save();
            // Slivers only earn a label past the zoom threshold; render
            // them tiny so they stay inside the slice.
            surface.set_font_size(if share >= style.pie_label_min_share {
                14.0
            } else {
                4.0
            });
            surface.set_fill_color(style.text_color);
            surface.set_text_align(TextAlign::Center);
            surface.set_text_baseline(TextBaseline::Middle);
            surface.fill_text(&format!("{:.1}%", share * 100.0), label_x, label_y);
            surface.restore();
        }
    }
}
