//! IChartSnapshotter: raster capture of a rendered chart.

use crate::errors::SnapshotError;
use crate::models::ChartSnapshot;

/// Captures the chart currently shown for a result.
///
/// Kept behind a trait so exports can run headlessly against a stub.
/// Callers treat every error as non-fatal: the export proceeds without an image.
#[allow(async_fn_in_trait)]
pub trait IChartSnapshotter {
    /// Whatever identifies a rendered chart for this backend.
    type Handle: ?Sized;

    async fn capture(&self, chart: &Self::Handle) -> Result<ChartSnapshot, SnapshotError>;
}
