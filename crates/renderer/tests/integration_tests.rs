//! Integration tests for the chart renderer and interaction engine

use freq_charts_renderer::{ChartView, RecordingSurface, SurfaceOp};
use freq_charts_shared::events::{
    InputEvent, MouseScrollDelta, PhysicalPosition, TouchPhase, TouchPoint,
};
use freq_charts_shared::{ChartKind, ChartStyle, FrequencyTable, InteractionOptions};

fn table(pairs: &[(&str, f64)]) -> FrequencyTable {
    pairs
        .iter()
        .map(|(label, value)| (label.to_string(), *value))
        .collect()
}

fn wheel_at(x: f64, y: f64, delta_y: f64) -> InputEvent {
    InputEvent::MouseWheel {
        delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, delta_y)),
        position: PhysicalPosition::new(x, y),
    }
}

#[test]
fn test_view_draws_bar_chart_once_per_change() {
    let mut view = ChartView::new(
        ChartKind::Bar,
        table(&[("alpha", 5.0), ("beta", 3.0)]),
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut surface = RecordingSurface::new(800.0, 600.0);

    // Initial draw happens; a second draw with no changes is skipped.
    assert!(view.draw(&mut surface));
    assert!(!view.draw(&mut surface));

    // A gesture schedules exactly one redraw.
    view.handle_event(wheel_at(400.0, 300.0, -1.0));
    assert!(view.draw(&mut surface));
    assert!(!view.draw(&mut surface));
}

#[test]
fn test_empty_table_renders_empty_state() {
    let mut view = ChartView::new(
        ChartKind::Pie,
        FrequencyTable::new(),
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut surface = RecordingSurface::new(400.0, 300.0);

    assert!(view.draw(&mut surface));
    assert!(surface.contains_text("No data to display"));
    assert_eq!(surface.fill_rects().len(), 0);
}

#[test]
fn test_zero_valued_table_is_caught_at_the_render_boundary() {
    // A lone zero-valued label defeats the pie's total; the boundary logs
    // and leaves the surface rather than panicking or propagating.
    let mut view = ChartView::new(
        ChartKind::Pie,
        table(&[("ghost", 0.0)]),
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut surface = RecordingSurface::new(400.0, 300.0);
    assert!(view.draw(&mut surface));
}

#[test]
fn test_chart_kind_switch_resets_the_view() {
    let mut view = ChartView::new(
        ChartKind::Bar,
        table(&[("alpha", 5.0)]),
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut surface = RecordingSurface::new(800.0, 600.0);
    view.draw(&mut surface);

    view.handle_event(wheel_at(100.0, 100.0, -1.0));
    assert!(view.view_state().zoom_level > 1.0);

    view.set_chart_kind(ChartKind::Pie);
    let mut surface = RecordingSurface::new(800.0, 600.0);
    assert!(view.draw(&mut surface));

    // Fresh engine: identity view bound to the new kind.
    assert_eq!(view.chart_kind(), ChartKind::Pie);
    assert!(view.view_state().is_identity());
    assert_eq!(view.view_state().chart_kind, ChartKind::Pie);
    assert!(surface.count(|op| matches!(op, SurfaceOp::Arc { .. })) > 0);
}

#[test]
fn test_switch_to_same_kind_keeps_the_engine() {
    let mut view = ChartView::new(
        ChartKind::Bar,
        table(&[("alpha", 5.0)]),
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    view.handle_event(wheel_at(100.0, 100.0, -1.0));
    let zoom = view.view_state().zoom_level;

    view.set_chart_kind(ChartKind::Bar);
    let mut surface = RecordingSurface::new(800.0, 600.0);
    view.draw(&mut surface);

    assert_eq!(view.view_state().zoom_level, zoom);
}

#[test]
fn test_zoom_bounds_hold_through_the_view() {
    let mut view = ChartView::new(
        ChartKind::Bar,
        table(&[("alpha", 5.0)]),
        ChartStyle::default(),
        InteractionOptions::default(),
    );

    for _ in 0..50 {
        view.handle_event(wheel_at(12.0, 34.0, -1.0));
        let state = view.view_state();
        assert!(state.zoom_level >= state.min_zoom && state.zoom_level <= state.max_zoom);
    }
    for _ in 0..100 {
        view.handle_event(wheel_at(12.0, 34.0, 1.0));
        let state = view.view_state();
        assert!(state.zoom_level >= state.min_zoom && state.zoom_level <= state.max_zoom);
    }
}

#[test]
fn test_reset_controls_return_to_identity() {
    let mut view = ChartView::new(
        ChartKind::Bar,
        table(&[("alpha", 5.0)]),
        ChartStyle::default(),
        InteractionOptions::default(),
    );

    view.handle_event(wheel_at(50.0, 50.0, -1.0));
    view.engine_mut().zoom_in();
    assert!(!view.view_state().is_identity());

    view.handle_event(InputEvent::DoubleClick);
    assert!(view.view_state().is_identity());

    view.handle_event(InputEvent::DoubleClick);
    assert!(view.view_state().is_identity());
}

#[test]
fn test_pinch_drives_redraws_through_the_view() {
    let mut view = ChartView::new(
        ChartKind::Pie,
        table(&[("a", 1.0), ("b", 2.0)]),
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut surface = RecordingSurface::new(400.0, 400.0);
    view.draw(&mut surface);

    view.handle_event(InputEvent::Touch {
        phase: TouchPhase::Started,
        touches: vec![
            TouchPoint::new(0, PhysicalPosition::new(100.0, 200.0)),
            TouchPoint::new(1, PhysicalPosition::new(200.0, 200.0)),
        ],
    });
    view.handle_event(InputEvent::Touch {
        phase: TouchPhase::Moved,
        touches: vec![
            TouchPoint::new(0, PhysicalPosition::new(50.0, 200.0)),
            TouchPoint::new(1, PhysicalPosition::new(250.0, 200.0)),
        ],
    });

    assert!((view.view_state().zoom_level - 2.0).abs() < 1.0e-9);

    let mut surface = RecordingSurface::new(400.0, 400.0);
    assert!(view.draw(&mut surface));
    assert!(surface.contains_text("Zoom: 200%"));
}

#[test]
fn test_full_pipeline_from_documents_to_bar_chart() {
    use freq_charts_data::aggregate;
    use freq_charts_shared::ParsedDocument;
    use serde_json::json;

    let documents = vec![ParsedDocument::new(
        "a.json",
        json!([{"score": 5}, {"score": 3}]),
    )];
    let table = aggregate(&documents);
    assert_eq!(table.get("score"), Some(8.0));

    let mut view = ChartView::new(
        ChartKind::Bar,
        table,
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut surface = RecordingSurface::new(800.0, 600.0);
    assert!(view.draw(&mut surface));

    // One bar, spanning the full chart height (600 - 40 top - 60 bottom).
    let rects = surface.fill_rects();
    assert_eq!(rects.len(), 1);
    let (_, y, _, height) = rects[0];
    assert!((height - 500.0).abs() < 1.0e-9);
    assert!((y - 40.0).abs() < 1.0e-9);
    assert!(surface.contains_text("score"));
    assert!(surface.contains_text("8"));
}
