//! ForecastSession: submit, view, export, and archive one forecast at a time.

use salescast_chart::ChartSurface;
use salescast_core::config::{ChartConfig, SalescastConfig};
use salescast_core::errors::{Collected, SalescastResult, SessionError};
use salescast_core::traits::{IChartSnapshotter, IForecastArchive, IForecastService};
use salescast_core::{DatasetUpload, ForecastResult, ForecastVariant, Region, SaveAck};
use salescast_export::{ExportArtifacts, ExportEngine, ExportFormats};
use salescast_normalize::ResultNormalizer;
use salescast_projection::{Row, SeriesProjector, Table};
use tracing::{info, warn};
use uuid::Uuid;

use crate::context::SelectionContext;

/// The caller-owned context of one forecast screen.
///
/// `submit` takes `&mut self`, so at most one request is in flight per
/// session. A failed submission leaves the previous result, chart, and
/// selection exactly as they were.
pub struct ForecastSession<S, A> {
    service: S,
    archive: A,
    normalizer: ResultNormalizer,
    engine: ExportEngine,
    chart_config: ChartConfig,
    context: SelectionContext,
    current: Option<ForecastResult>,
    chart: ChartSurface,
}

impl<S: IForecastService, A: IForecastArchive> ForecastSession<S, A> {
    pub fn new(service: S, archive: A, config: &SalescastConfig) -> Self {
        Self {
            service,
            archive,
            normalizer: ResultNormalizer::new(),
            engine: ExportEngine::new(&config.export),
            chart_config: config.chart.clone(),
            context: SelectionContext::new(
                Uuid::new_v4().to_string(),
                Some(config.forecast.effective_default_region()),
            ),
            current: None,
            chart: ChartSurface::unmounted(),
        }
    }

    pub fn context(&self) -> &SelectionContext {
        &self.context
    }

    pub fn select_file(&mut self, upload: DatasetUpload) {
        self.context.select_file(upload);
    }

    pub fn select_region(&mut self, region: Option<Region>) {
        self.context.select_region(region);
    }

    /// Upload the selected dataset and replace the current result with the
    /// normalized answer.
    pub async fn submit(&mut self, variant: ForecastVariant) -> SalescastResult<&ForecastResult> {
        let request = self.context.request_for(variant)?;
        let outcome = self.service.forecast(&request).await;
        self.context.record_request();

        let raw = outcome?;
        let result = self.normalizer.normalize_with_region(
            &raw,
            variant,
            &request.upload.file_name,
            request.region,
        )?;

        info!(
            session = %self.context.session_id,
            variant = %variant,
            steps = result.len(),
            "forecast ready"
        );
        self.chart.mount(&result, &self.chart_config);
        Ok(self.current.insert(result))
    }

    pub fn current(&self) -> Option<&ForecastResult> {
        self.current.as_ref()
    }

    fn require_current(&self) -> Result<&ForecastResult, SessionError> {
        self.current.as_ref().ok_or(SessionError::NoResult)
    }

    /// Rows of the current result, for the on-screen table.
    pub fn rows(&self) -> Result<Vec<Row>, SessionError> {
        Ok(SeriesProjector::new().project(self.require_current()?))
    }

    pub fn table(&self) -> Result<Table, SessionError> {
        Ok(Table::build(self.require_current()?, self.engine.decimals()))
    }

    /// The chart showing the current result. Unmounted until a submit succeeds.
    pub fn chart(&self) -> &ChartSurface {
        &self.chart
    }

    /// Generate artifacts for the current result. A failed chart capture only
    /// drops the image.
    pub async fn export<C>(
        &self,
        formats: ExportFormats,
        snapshotter: &C,
    ) -> SalescastResult<ExportArtifacts>
    where
        C: IChartSnapshotter<Handle = ChartSurface>,
    {
        let result = self.require_current()?;
        Ok(self
            .engine
            .export(result, formats, snapshotter, &self.chart)
            .await?)
    }

    /// Save the current result. On failure the result stays current and can
    /// be saved again.
    pub async fn save(&self) -> SalescastResult<SaveAck> {
        let result = self.require_current()?;
        match self.archive.save(result).await {
            Ok(ack) => Ok(ack),
            Err(e) => {
                warn!(error = %e, "save failed, result kept in session");
                Err(e.into())
            }
        }
    }

    /// Everything the archive holds, in store order.
    pub async fn saved(&self) -> SalescastResult<Collected<Vec<ForecastResult>>> {
        Ok(self.archive.list().await?)
    }
}
