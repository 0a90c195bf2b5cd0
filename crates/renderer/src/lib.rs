//! Chart rendering and interaction for freq-charts
//!
//! This crate draws frequency tables as pie or bar charts on an abstract
//! 2-D surface and owns the zoom/pan interaction engine. Each canvas gets
//! its own [`ChartView`] handle; there is no module-global chart state.

use std::cell::Cell;
use std::rc::Rc;

pub mod chart_renderers;
pub mod colors;
pub mod interaction;
pub mod legend;
pub mod summary;
pub mod surface;
pub mod transform;

pub use chart_renderers::{
    bar_at, segments, slice_at, BarChartRenderer, BarLayout, ChartRenderer, ChartSegment,
    PieChartRenderer,
};
pub use interaction::InteractionEngine;
pub use surface::{RecordingSurface, Surface, SurfaceOp, TextAlign, TextBaseline};
pub use transform::apply_view_transform;

use freq_charts_shared::events::InputEvent;
use freq_charts_shared::{ChartKind, ChartStyle, FrequencyTable, InteractionOptions, ViewState};

/// Per-canvas chart handle owning the renderer, the interaction engine and
/// the current data.
///
/// Switching chart kinds discards the engine and builds a fresh renderer,
/// so zoom/pan intentionally does not survive a switch. Renderer failures
/// are caught at [`ChartView::draw`] (logged, with the surface left in its
/// prior state) and never propagate.
pub struct ChartView {
    kind: ChartKind,
    style: ChartStyle,
    options: InteractionOptions,
    renderer: Box<dyn ChartRenderer>,
    engine: InteractionEngine,
    table: FrequencyTable,
    needs_redraw: Rc<Cell<bool>>,
}

impl ChartView {
    pub fn new(
        kind: ChartKind,
        table: FrequencyTable,
        style: ChartStyle,
        options: InteractionOptions,
    ) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));
        Self {
            renderer: build_renderer(kind, &style),
            engine: build_engine(kind, &options, &needs_redraw),
            kind,
            style,
            options,
            table,
            needs_redraw,
        }
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.kind
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn view_state(&self) -> &ViewState {
        self.engine.view_state()
    }

    /// Direct access to the engine, for explicit zoom/reset controls.
    pub fn engine_mut(&mut self) -> &mut InteractionEngine {
        &mut self.engine
    }

    /// Forward one input event to the interaction engine.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.engine.handle_event(event);
    }

    /// Replace the aggregated data and schedule a redraw.
    pub fn set_table(&mut self, table: FrequencyTable) {
        self.table = table;
        self.needs_redraw.set(true);
    }

    /// Switch chart kinds. The engine is marked invalid and replaced on
    /// the next draw; view state intentionally resets.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        if kind == self.kind {
            return;
        }
        self.kind = kind;
        self.engine.invalidate();
        self.needs_redraw.set(true);
    }

    /// Force the next draw even without an interaction.
    pub fn request_redraw(&mut self) {
        self.needs_redraw.set(true);
    }

    /// Render if anything changed since the last draw.
    ///
    /// Returns true when a draw happened.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if self.engine.take_invalidated() {
            self.renderer = build_renderer(self.kind, &self.style);
            self.engine = build_engine(self.kind, &self.options, &self.needs_redraw);
            self.needs_redraw.set(true);
        }

        if !self.needs_redraw.replace(false) {
            return false;
        }

        if self.table.is_empty() {
            draw_empty_state(surface, &self.style);
            return true;
        }

        let view = self.engine.view_state().clone();
        if let Err(error) = self.renderer.render(&self.table, surface, Some(&view)) {
            // Render boundary: keep the prior visual state, never propagate.
            log::error!("{} renderer failed: {error}", self.renderer.name());
        }
        true
    }
}

fn build_renderer(kind: ChartKind, style: &ChartStyle) -> Box<dyn ChartRenderer> {
    match kind {
        ChartKind::Pie => Box::new(PieChartRenderer::new(style.clone())),
        ChartKind::Bar => Box::new(BarChartRenderer::new(style.clone())),
    }
}

fn build_engine(
    kind: ChartKind,
    options: &InteractionOptions,
    needs_redraw: &Rc<Cell<bool>>,
) -> InteractionEngine {
    let redraw = Rc::clone(needs_redraw);
    InteractionEngine::new(kind, *options, Box::new(move |_| redraw.set(true)))
}

fn draw_empty_state(surface: &mut dyn Surface, style: &ChartStyle) {
    surface.clear();
    surface.set_font_size(14.0);
    surface.set_fill_color(style.text_color);
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Middle);
    surface.fill_text(
        "No data to display",
        surface.width() / 2.0,
        surface.height() / 2.0,
    );
}
