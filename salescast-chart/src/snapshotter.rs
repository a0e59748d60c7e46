//! PlottersSnapshotter: headless IChartSnapshotter.

use salescast_core::errors::SnapshotError;
use salescast_core::traits::IChartSnapshotter;
use salescast_core::ChartSnapshot;
use tracing::debug;

use crate::render::render_png;
use crate::surface::ChartSurface;

/// Captures a [`ChartSurface`] by re-rendering it offscreen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersSnapshotter;

impl PlottersSnapshotter {
    pub fn new() -> Self {
        Self
    }
}

impl IChartSnapshotter for PlottersSnapshotter {
    type Handle = ChartSurface;

    async fn capture(&self, chart: &ChartSurface) -> Result<ChartSnapshot, SnapshotError> {
        let (rows, (width, height)) = match (chart.rows(), chart.dimensions()) {
            (Some(rows), Some(dims)) => (rows, dims),
            _ => return Err(SnapshotError::NotMounted),
        };

        let png = render_png(rows, width, height)?;
        debug!(width, height, bytes = png.len(), "chart captured");
        Ok(ChartSnapshot::new(png, width, height))
    }
}
