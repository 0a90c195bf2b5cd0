//! End-to-end: JSON files on disk through aggregation, summary and chart

use std::fs;

use freq_charts_cli::SvgSurface;
use freq_charts_data::DataManager;
use freq_charts_renderer::summary::{SortMethod, SummaryTable};
use freq_charts_renderer::{ChartView, RecordingSurface};
use freq_charts_shared::{ChartKind, ChartStyle, InteractionOptions};
use tempfile::TempDir;

#[tokio::test]
async fn test_score_file_to_bar_chart_and_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.json");
    fs::write(&path, r#"[{"score": 5}, {"score": 3}]"#).unwrap();

    let mut manager = DataManager::new();
    manager.add_files([path]);
    let handle = manager.process_batch().await.unwrap().unwrap();

    let table = handle.table.clone();
    assert_eq!(table.get("score"), Some(8.0));
    assert_eq!(table.len(), 1);

    // Summary: one row, `score | 8 | 100.0%`, plus the SUMMARY total.
    let summary = SummaryTable::build(&table, SortMethod::Value);
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].label, "score");
    assert_eq!(summary.rows[0].value, 8.0);
    assert_eq!(summary.rows[0].percent_display(), "100.0%");

    let text = summary.to_text();
    assert!(text.contains("score"));
    assert!(text.contains("100.0%"));
    assert!(text.contains("SUMMARY"));

    // Bar chart: the single bar spans the full chart height.
    let mut view = ChartView::new(
        ChartKind::Bar,
        table.clone(),
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut recording = RecordingSurface::new(800.0, 600.0);
    assert!(view.draw(&mut recording));

    let rects = recording.fill_rects();
    assert_eq!(rects.len(), 1);
    let (_, y, _, bar_height) = rects[0];
    assert!((bar_height - 500.0).abs() < 1.0e-9);
    assert!((y - 40.0).abs() < 1.0e-9);
    assert!(recording.contains_text("score"));

    // The same view drives the SVG backend.
    let mut view = ChartView::new(
        ChartKind::Bar,
        table,
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut svg_surface = SvgSurface::new(800.0, 600.0);
    assert!(view.draw(&mut svg_surface));
    let svg = svg_surface.finish();

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("<rect "));
    assert!(svg.contains(">score</text>"));
    assert!(svg.contains("Bar Chart"));
}

#[tokio::test]
async fn test_pie_chart_svg_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fruit.json");
    fs::write(&path, r#"["apple", "apple", "pear"]"#).unwrap();

    let mut manager = DataManager::new();
    manager.add_files([path]);
    let table = manager.process_batch().await.unwrap().unwrap().table.clone();

    let mut view = ChartView::new(
        ChartKind::Pie,
        table,
        ChartStyle::default(),
        InteractionOptions::default(),
    );
    let mut surface = SvgSurface::new(400.0, 400.0);
    assert!(view.draw(&mut surface));
    let svg = surface.finish();

    // Two slices, both with arc segments, plus percentage labels.
    assert_eq!(svg.matches("<path ").count(), 2);
    assert!(svg.contains(" A "));
    assert!(svg.contains("66.7%"));
    assert!(svg.contains("33.3%"));
    assert!(svg.contains("Pie Chart"));
}
