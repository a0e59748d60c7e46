//! ExportEngine: PDF and CSV generation for a held result.

use salescast_core::config::{ExportConfig, PageSize};
use salescast_core::errors::ExportError;
use salescast_core::traits::IChartSnapshotter;
use salescast_core::{ChartSnapshot, ForecastResult};
use tracing::{info, warn};

use crate::artifacts::{ExportArtifacts, ExportFormats};
use crate::csv_export::{write_csv, CsvExport};
use crate::pdf::render_pdf;
use crate::report::PdfReport;

/// Builds export artifacts from a result that is already in memory.
///
/// Chart snapshots are optional everywhere: a missing or failed capture
/// yields artifacts without the image, never an error.
#[derive(Debug, Clone)]
pub struct ExportEngine {
    decimals: usize,
    page_size: PageSize,
    embed_chart: bool,
}

impl Default for ExportEngine {
    fn default() -> Self {
        Self::new(&ExportConfig::default())
    }
}

impl ExportEngine {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            decimals: config.effective_table_decimals(),
            page_size: config.effective_page_size(),
            embed_chart: config.effective_embed_chart(),
        }
    }

    /// Decimal places of the PDF table.
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn embeds_chart(&self) -> bool {
        self.embed_chart
    }

    /// Title, summary, chart image if given, then the table.
    pub fn export_pdf(
        &self,
        result: &ForecastResult,
        snapshot: Option<&ChartSnapshot>,
    ) -> Result<Vec<u8>, ExportError> {
        let _span = salescast_core::export_span!("pdf", result.len()).entered();
        let report = PdfReport::build(result, self.decimals);
        let chart = snapshot.filter(|_| self.embed_chart);
        let bytes = render_pdf(&report, chart, self.page_size)?;
        info!(
            bytes = bytes.len(),
            with_chart = chart.is_some(),
            "PDF report generated"
        );
        Ok(bytes)
    }

    /// CSV text plus the companion chart, which travels as a separate artifact.
    pub fn export_csv(
        &self,
        result: &ForecastResult,
        snapshot: Option<ChartSnapshot>,
    ) -> Result<CsvExport, ExportError> {
        let _span = salescast_core::export_span!("csv", result.len()).entered();
        let csv = write_csv(result)?;
        let chart = snapshot.filter(|_| self.embed_chart);
        info!(
            bytes = csv.len(),
            with_chart = chart.is_some(),
            "CSV generated"
        );
        Ok(CsvExport { csv, chart })
    }

    /// Capture the chart, downgrading any failure to `None` with a warning.
    pub async fn capture_chart<S: IChartSnapshotter>(
        &self,
        snapshotter: &S,
        chart: &S::Handle,
    ) -> Option<ChartSnapshot> {
        if !self.embed_chart {
            return None;
        }
        match snapshotter.capture(chart).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "chart snapshot unavailable, exporting without image");
                None
            }
        }
    }

    /// Capture once, then build every requested format from the same snapshot.
    pub async fn export<S: IChartSnapshotter>(
        &self,
        result: &ForecastResult,
        formats: ExportFormats,
        snapshotter: &S,
        chart: &S::Handle,
    ) -> Result<ExportArtifacts, ExportError> {
        let mut artifacts = ExportArtifacts::new(result.variant());
        if formats.is_empty() {
            return Ok(artifacts);
        }

        let snapshot = self.capture_chart(snapshotter, chart).await;

        if formats.pdf {
            artifacts.pdf = Some(self.export_pdf(result, snapshot.as_ref())?);
        }
        if formats.csv {
            let export = self.export_csv(result, snapshot)?;
            artifacts.csv = Some(export.csv);
            artifacts.chart_png = export.chart.map(ChartSnapshot::into_png);
        }
        Ok(artifacts)
    }
}
