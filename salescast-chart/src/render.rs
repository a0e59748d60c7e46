//! Rasterization of forecast rows with plotters' bitmap backend.
//!
//! No text is drawn: the bitmap backend is built without font support, so
//! axes are reduced to horizontal gridlines.

use std::fmt::Display;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::prelude::*;
use salescast_core::errors::SnapshotError;
use salescast_projection::Row;

const MARGIN_PX: u32 = 24;
const GRID_LINES: usize = 5;
const MARKER_RADIUS: i32 = 3;

const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);
const LINE_COLOR: RGBColor = RGBColor(75, 192, 192);
const BAND_COLOR: RGBColor = RGBColor(54, 162, 235);
const BAND_OPACITY: f64 = 0.2;

/// Draw `rows` into a `width` x `height` RGB canvas and encode it as PNG.
pub fn render_png(rows: &[Row], width: u32, height: u32) -> Result<Vec<u8>, SnapshotError> {
    if rows.is_empty() {
        return Err(SnapshotError::Render {
            reason: "no data points to draw".to_string(),
        });
    }
    if width == 0 || height == 0 {
        return Err(SnapshotError::Render {
            reason: format!("invalid canvas size {width}x{height}"),
        });
    }

    let mut canvas = vec![0u8; width as usize * height as usize * 3];
    draw(rows, &mut canvas, width, height)?;
    encode_png(&canvas, width, height)
}

fn draw(rows: &[Row], canvas: &mut [u8], width: u32, height: u32) -> Result<(), SnapshotError> {
    let root = BitMapBackend::with_buffer(canvas, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (y_lo, y_hi) = value_range(rows);
    let x_hi = rows.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN_PX)
        .build_cartesian_2d(0f64..x_hi, y_lo..y_hi)
        .map_err(render_err)?;

    for i in 0..=GRID_LINES {
        let y = y_lo + (y_hi - y_lo) * i as f64 / GRID_LINES as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, y), (x_hi, y)],
                &GRID_COLOR,
            )))
            .map_err(render_err)?;
    }

    for band in interval_bands(rows) {
        chart
            .draw_series(std::iter::once(Polygon::new(
                band,
                BAND_COLOR.mix(BAND_OPACITY).filled(),
            )))
            .map_err(render_err)?;
    }

    let points: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.forecast.is_finite())
        .map(|(i, r)| (i as f64, r.forecast))
        .collect();

    chart
        .draw_series(LineSeries::new(points.iter().copied(), LINE_COLOR.stroke_width(2)))
        .map_err(render_err)?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, MARKER_RADIUS, LINE_COLOR.filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

/// Closed polygons covering each run of steps where both bounds are known.
/// A step with a missing bound breaks the band.
fn interval_bands(rows: &[Row]) -> Vec<Vec<(f64, f64)>> {
    let mut bands = Vec::new();
    let mut run: Vec<(f64, f64, f64)> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        match (row.lower_ci, row.upper_ci) {
            (Some(lo), Some(hi)) if lo.is_finite() && hi.is_finite() => {
                run.push((i as f64, lo, hi));
            }
            _ => flush_band(&mut run, &mut bands),
        }
    }
    flush_band(&mut run, &mut bands);
    bands
}

fn flush_band(run: &mut Vec<(f64, f64, f64)>, bands: &mut Vec<Vec<(f64, f64)>>) {
    if run.len() >= 2 {
        let upper = run.iter().map(|&(x, _, hi)| (x, hi));
        let lower = run.iter().rev().map(|&(x, lo, _)| (x, lo));
        bands.push(upper.chain(lower).collect());
    }
    run.clear();
}

/// Y range over forecasts and known bounds, padded so the series never
/// touches the frame. A flat series gets a unit pad on each side.
fn value_range(rows: &[Row]) -> (f64, f64) {
    let values = rows
        .iter()
        .flat_map(|r| [Some(r.forecast), r.lower_ci, r.upper_ci])
        .flatten()
        .filter(|v| v.is_finite());
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = span * 0.05;
    (lo - pad, hi + pad)
}

fn encode_png(canvas: &[u8], width: u32, height: u32) -> Result<Vec<u8>, SnapshotError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(canvas, width, height, ColorType::Rgb8)
        .map_err(|e| SnapshotError::Encode {
            reason: e.to_string(),
        })?;
    Ok(png)
}

fn render_err(e: impl Display) -> SnapshotError {
    SnapshotError::Render {
        reason: e.to_string(),
    }
}
