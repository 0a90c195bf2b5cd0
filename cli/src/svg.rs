//! SVG drawing surface
//!
//! A file-writing stand-in for an interactive canvas: implements enough of
//! the 2-D surface contract to exercise the chart renderers natively. Each
//! drawn element carries the transform that was current when it was drawn.

use std::fmt::Write as _;

use freq_charts_renderer::{Surface, TextAlign, TextBaseline};

/// Row-major 2-D affine transform, canvas-style:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Affine {
    const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Post-multiply by another transform, matching canvas semantics where
    /// the newest operation applies closest to the geometry.
    fn then(self, other: Affine) -> Affine {
        Affine {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    fn translation(dx: f64, dy: f64) -> Affine {
        Affine {
            e: dx,
            f: dy,
            ..Affine::IDENTITY
        }
    }

    fn scaling(sx: f64, sy: f64) -> Affine {
        Affine {
            a: sx,
            d: sy,
            ..Affine::IDENTITY
        }
    }

    fn rotation(radians: f64) -> Affine {
        let (sin, cos) = radians.sin_cos();
        Affine {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    fn is_identity(&self) -> bool {
        *self == Affine::IDENTITY
    }

    fn svg(&self) -> String {
        format!(
            "matrix({} {} {} {} {} {})",
            fmt(self.a),
            fmt(self.b),
            fmt(self.c),
            fmt(self.d),
            fmt(self.e),
            fmt(self.f)
        )
    }
}

#[derive(Debug, Clone)]
struct GraphicsState {
    transform: Affine,
    fill_color: [f32; 4],
    stroke_color: [f32; 4],
    line_width: f64,
    font_size: f64,
    text_align: TextAlign,
    text_baseline: TextBaseline,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill_color: [0.0, 0.0, 0.0, 1.0],
            stroke_color: [0.0, 0.0, 0.0, 1.0],
            line_width: 1.0,
            font_size: 12.0,
            text_align: TextAlign::Left,
            text_baseline: TextBaseline::Alphabetic,
        }
    }
}

/// Surface implementation that accumulates an SVG document
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    path: String,
    /// Last pen position, used to bridge into arc starts
    current_point: Option<(f64, f64)>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            state: GraphicsState::default(),
            stack: Vec::new(),
            path: String::new(),
            current_point: None,
        }
    }

    /// Finish the document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = fmt(self.width),
            h = fmt(self.height),
            body = self.body,
        )
    }

    fn transform_attr(&self) -> String {
        if self.state.transform.is_identity() {
            String::new()
        } else {
            format!(" transform=\"{}\"", self.state.transform.svg())
        }
    }

    fn emit_path(&mut self, paint: &str) {
        if self.path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "<path d=\"{}\"{} {}/>",
            self.path.trim(),
            self.transform_attr(),
            paint,
        );
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.body.clear();
        self.path.clear();
        self.current_point = None;
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform.then(Affine::translation(dx, dy));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform.then(Affine::scaling(sx, sy));
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform.then(Affine::rotation(radians));
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.current_point = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M {} {} ", fmt(x), fmt(y));
        self.current_point = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "L {} {} ", fmt(x), fmt(y));
        self.current_point = Some((x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let start = (cx + radius * start_angle.cos(), cy + radius * start_angle.sin());
        let end = (cx + radius * end_angle.cos(), cy + radius * end_angle.sin());

        // Bridge from the current pen position to the arc start, like a
        // canvas does.
        if self.current_point.is_some() {
            let _ = write!(self.path, "L {} {} ", fmt(start.0), fmt(start.1));
        } else {
            let _ = write!(self.path, "M {} {} ", fmt(start.0), fmt(start.1));
        }

        let sweep = end_angle - start_angle;
        if sweep.abs() >= 2.0 * std::f64::consts::PI - 1.0e-9 {
            // Full circle: a single SVG arc with coincident endpoints
            // collapses, so split it in two.
            let mid = (cx - radius * start_angle.cos(), cy - radius * start_angle.sin());
            let _ = write!(
                self.path,
                "A {r} {r} 0 1 1 {mx} {my} A {r} {r} 0 1 1 {ex} {ey} ",
                r = fmt(radius),
                mx = fmt(mid.0),
                my = fmt(mid.1),
                ex = fmt(start.0),
                ey = fmt(start.1),
            );
            self.current_point = Some(start);
            return;
        }

        let large_arc = i32::from(sweep.abs() > std::f64::consts::PI);
        let sweep_flag = i32::from(sweep > 0.0);
        let _ = write!(
            self.path,
            "A {r} {r} 0 {large_arc} {sweep_flag} {ex} {ey} ",
            r = fmt(radius),
            ex = fmt(end.0),
            ey = fmt(end.1),
        );
        self.current_point = Some(end);
    }

    fn close_path(&mut self) {
        let _ = write!(self.path, "Z ");
    }

    fn fill(&mut self) {
        let paint = format!("fill=\"{}\"", css_color(self.state.fill_color));
        self.emit_path(&paint);
    }

    fn stroke(&mut self) {
        let paint = format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
            css_color(self.state.stroke_color),
            fmt(self.state.line_width),
        );
        self.emit_path(&paint);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{} fill=\"{}\"/>",
            fmt(x),
            fmt(y),
            fmt(width),
            fmt(height),
            self.transform_attr(),
            css_color(self.state.fill_color),
        );
    }

    fn set_fill_color(&mut self, color: [f32; 4]) {
        self.state.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: [f32; 4]) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_font_size(&mut self, px: f64) {
        self.state.font_size = px;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let anchor = match self.state.text_align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match self.state.text_baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "central",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "text-after-edge",
        };
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"sans-serif\" \
             text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\"{} fill=\"{}\">{}</text>",
            fmt(x),
            fmt(y),
            fmt(self.state.font_size),
            self.transform_attr(),
            css_color(self.state.fill_color),
            escape_xml(text),
        );
    }
}

/// Trim trailing zeros so the output stays readable.
fn fmt(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1.0e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

fn css_color(color: [f32; 4]) -> String {
    let r = (color[0].clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (color[1].clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (color[2].clamp(0.0, 1.0) * 255.0).round() as u8;
    let a = color[3].clamp(0.0, 1.0);
    if a >= 1.0 {
        format!("rgb({r},{g},{b})")
    } else {
        format!("rgba({r},{g},{b},{a:.3})")
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let surface = SvgSurface::new(800.0, 600.0);
        let svg = surface.finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"800\" height=\"600\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_filled_path_and_rect() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.set_fill_color([1.0, 0.0, 0.0, 1.0]);
        surface.begin_path();
        surface.move_to(10.0, 10.0);
        surface.line_to(90.0, 10.0);
        surface.close_path();
        surface.fill();
        surface.fill_rect(0.0, 0.0, 50.0, 25.0);

        let svg = surface.finish();
        assert!(svg.contains("<path d=\"M 10 10 L 90 10 Z\" fill=\"rgb(255,0,0)\"/>"));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"50\" height=\"25\" fill=\"rgb(255,0,0)\"/>"));
    }

    #[test]
    fn test_transform_attribute_tracks_canvas_state() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.save();
        surface.translate(10.0, 20.0);
        surface.scale(2.0, 2.0);
        surface.fill_rect(0.0, 0.0, 5.0, 5.0);
        surface.restore();
        surface.fill_rect(1.0, 1.0, 2.0, 2.0);

        let svg = surface.finish();
        assert!(svg.contains("transform=\"matrix(2 0 0 2 10 20)\""));
        // After restore, elements carry no transform again.
        assert!(svg.contains("<rect x=\"1\" y=\"1\" width=\"2\" height=\"2\" fill=\""));
    }

    #[test]
    fn test_rotated_anchored_text() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.set_text_align(TextAlign::Center);
        surface.set_text_baseline(TextBaseline::Middle);
        surface.rotate(std::f64::consts::PI / 4.0);
        surface.fill_text("a<b", 0.0, 0.0);

        let svg = surface.finish();
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("dominant-baseline=\"central\""));
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("matrix(0.707"));
    }

    #[test]
    fn test_arc_bridges_from_pen_position() {
        let mut surface = SvgSurface::new(200.0, 200.0);
        surface.begin_path();
        surface.move_to(100.0, 100.0);
        surface.arc(100.0, 100.0, 50.0, 0.0, std::f64::consts::PI / 2.0);
        surface.close_path();
        surface.fill();

        let svg = surface.finish();
        // Pen bridges to the arc start (150, 100), then sweeps clockwise.
        assert!(svg.contains("M 100 100 L 150 100 A 50 50 0 0 1 100 150 Z"));
    }
}
