//! Index-derived chart palettes
//!
//! Colors are deterministic per index within one sort order, so an entry
//! keeps its color across re-renders until the ordering itself changes.

use freq_charts_shared::ChartKind;

const BAR_BASE_HUE: f64 = 220.0;
const BAR_SATURATION: f64 = 65.0;
const BAR_LIGHTNESS: f64 = 50.0;

/// Red, yellow, green, cyan, blue, magenta anchors for pie slices
const PIE_BASE_HUES: [f64; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

/// Palette of `count` colors for the given chart kind.
pub fn chart_palette(count: usize, kind: ChartKind) -> Vec<[f32; 4]> {
    match kind {
        ChartKind::Pie => pie_palette(count),
        ChartKind::Bar => bar_palette(count),
    }
}

/// Hue rotation around a blue base; past 20 entries the wheel repeats.
fn bar_palette(count: usize) -> Vec<[f32; 4]> {
    let step = 360.0 / count.clamp(1, 20) as f64;
    (0..count)
        .map(|index| {
            let hue = (BAR_BASE_HUE + index as f64 * step) % 360.0;
            hsl_to_rgba(hue, BAR_SATURATION, BAR_LIGHTNESS)
        })
        .collect()
}

/// Six anchor hues, varied in lightness per entry and desaturated on each
/// full cycle through the anchors.
fn pie_palette(count: usize) -> Vec<[f32; 4]> {
    (0..count)
        .map(|index| {
            let hue = PIE_BASE_HUES[index % PIE_BASE_HUES.len()];
            let lightness = 50.0 + (index % 3) as f64 * 10.0;
            let saturation = (70.0 - (index / PIE_BASE_HUES.len()) as f64 * 10.0).max(10.0);
            hsl_to_rgba(hue, saturation, lightness)
        })
        .collect()
}

/// HSL (degrees, percent, percent) to RGBA components in [0, 1].
pub fn hsl_to_rgba(hue: f64, saturation: f64, lightness: f64) -> [f32; 4] {
    let h = (hue.rem_euclid(360.0)) / 360.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        return [l as f32, l as f32, l as f32, 1.0];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    [r as f32, g as f32, b as f32, 1.0]
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Black or white, whichever reads better over `background`.
pub fn contrast_color(background: [f32; 4]) -> [f32; 4] {
    let luminance =
        0.299 * background[0] as f64 + 0.587 * background[1] as f64 + 0.114 * background[2] as f64;
    if luminance > 0.5 {
        [0.0, 0.0, 0.0, 1.0]
    } else {
        [1.0, 1.0, 1.0, 1.0]
    }
}
