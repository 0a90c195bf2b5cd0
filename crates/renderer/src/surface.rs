//! Abstract 2-D drawing surface
//!
//! The embedding layer provides the real canvas; renderers only ever see
//! this trait. `RecordingSurface` captures the operation stream for tests
//! and headless inspection.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

/// Canvas-style drawing operations required by the chart renderers
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn rotate(&mut self, radians: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Circular arc from `start_angle` to `end_angle`, proceeding
    /// clockwise in screen coordinates (y grows downward).
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_fill_color(&mut self, color: [f32; 4]);
    fn set_stroke_color(&mut self, color: [f32; 4]);
    fn set_line_width(&mut self, width: f64);
    fn set_font_size(&mut self, px: f64);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Every operation a surface can receive
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    Rotate { radians: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64 },
    ClosePath,
    Fill,
    Stroke,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    FillColor([f32; 4]),
    StrokeColor([f32; 4]),
    LineWidth(f64),
    FontSize(f64),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    FillText { text: String, x: f64, y: f64 },
}

/// Records the operation stream instead of drawing anything
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// All recorded text strings, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }

    /// All recorded filled rectangles, in draw order.
    pub fn fill_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRect {
                    x,
                    y,
                    width,
                    height,
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(SurfaceOp::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(SurfaceOp::Rotate { radians });
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ops.push(SurfaceOp::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill_color(&mut self, color: [f32; 4]) {
        self.ops.push(SurfaceOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: [f32; 4]) {
        self.ops.push(SurfaceOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_font_size(&mut self, px: f64) {
        self.ops.push(SurfaceOp::FontSize(px));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(SurfaceOp::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.ops.push(SurfaceOp::TextBaseline(baseline));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
