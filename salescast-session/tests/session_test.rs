//! ForecastSession tests with stub service and archive collaborators.

use std::cell::{Cell, RefCell};

use salescast_chart::{ChartSurface, PlottersSnapshotter};
use salescast_cloud::InMemoryArchive;
use salescast_core::config::SalescastConfig;
use salescast_core::errors::{
    ArchiveError, Collected, PayloadError, SalescastError, SalescastResult, ServiceError,
    SessionError, SnapshotError,
};
use salescast_core::traits::{IChartSnapshotter, IForecastArchive, IForecastService};
use salescast_core::{
    ChartSnapshot, DatasetUpload, ForecastRequest, ForecastResult, ForecastVariant, Region,
    SaveAck,
};
use salescast_export::ExportFormats;
use salescast_session::ForecastSession;
use serde_json::Value;
use test_fixtures::{load_fixture_value, sample_sales_csv};

// ─── Stubs ────────────────────────────────────────────────────────────────

/// Replays queued responses and records every request it receives.
#[derive(Default)]
struct ScriptedService {
    responses: RefCell<Vec<SalescastResult<Value>>>,
    seen: RefCell<Vec<ForecastRequest>>,
}

impl ScriptedService {
    fn replying(responses: Vec<SalescastResult<Value>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
            seen: RefCell::default(),
        }
    }
}

impl IForecastService for ScriptedService {
    async fn forecast(&self, request: &ForecastRequest) -> SalescastResult<Value> {
        self.seen.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop()
            .expect("no scripted response left")
    }
}

/// Fails every save until `fail` is cleared.
struct FlakyArchive {
    fail: Cell<bool>,
    inner: InMemoryArchive,
}

impl IForecastArchive for FlakyArchive {
    async fn save(&self, result: &ForecastResult) -> Result<SaveAck, ArchiveError> {
        if self.fail.get() {
            return Err(ArchiveError::Unavailable {
                reason: "connection refused".into(),
            });
        }
        self.inner.save(result).await
    }

    async fn list(&self) -> Result<Collected<Vec<ForecastResult>>, ArchiveError> {
        self.inner.list().await
    }
}

struct BrokenSnapshotter;

impl IChartSnapshotter for BrokenSnapshotter {
    type Handle = ChartSurface;

    async fn capture(&self, _chart: &ChartSurface) -> Result<ChartSnapshot, SnapshotError> {
        Err(SnapshotError::Render {
            reason: "backend gone".into(),
        })
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────

fn small_config() -> SalescastConfig {
    SalescastConfig::from_toml("[chart]\nwidth_px = 200\nheight_px = 100\n").unwrap()
}

fn session_with(
    responses: Vec<SalescastResult<Value>>,
) -> ForecastSession<ScriptedService, InMemoryArchive> {
    let mut session = ForecastSession::new(
        ScriptedService::replying(responses),
        InMemoryArchive::new(),
        &small_config(),
    );
    session.select_file(DatasetUpload::new("sales.csv", sample_sales_csv()));
    session
}

fn univariate_ok() -> SalescastResult<Value> {
    Ok(load_fixture_value("service/univariate_ok.json"))
}

// ─── Submit ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_submit_normalizes_and_mounts_chart() {
    let mut session = session_with(vec![univariate_ok()]);
    assert!(!session.chart().is_mounted());

    let result = session.submit(ForecastVariant::Univariate).await.unwrap();
    assert_eq!(result.file_name(), "sales.csv");
    assert!(result.has_confidence_intervals());

    assert!(session.chart().is_mounted());
    assert_eq!(session.rows().unwrap().len(), 2);
    assert_eq!(
        session.table().unwrap().headers(),
        ["Date", "Forecast", "Lower CI", "Upper CI"]
    );
    assert_eq!(session.context().requests_made, 1);
}

#[tokio::test]
async fn test_submit_without_file_fails() {
    let mut session = ForecastSession::new(
        ScriptedService::default(),
        InMemoryArchive::new(),
        &small_config(),
    );
    let err = session
        .submit(ForecastVariant::Univariate)
        .await
        .unwrap_err();
    assert_eq!(err, SalescastError::Session(SessionError::NoFile));
    assert_eq!(err.to_string(), "Session error: Please select a file first");
}

#[tokio::test]
async fn test_multivariate_requires_region() {
    let mut session = session_with(vec![]);
    session.select_region(None);
    let err = session
        .submit(ForecastVariant::Multivariate)
        .await
        .unwrap_err();
    assert_eq!(err, SalescastError::Session(SessionError::RegionRequired));
}

#[tokio::test]
async fn test_multivariate_uses_default_region() {
    let payload = serde_json::json!({ "forecast": [1.0], "forecast_index": ["2024-01-01"] });
    let mut session = session_with(vec![Ok(payload)]);

    let result = session.submit(ForecastVariant::Multivariate).await.unwrap();
    assert_eq!(result.region(), Some(Region::India));
}

#[tokio::test]
async fn test_multivariate_sends_selected_region() {
    let payload = load_fixture_value("service/multivariate_ok.json");
    let mut session = session_with(vec![Ok(payload)]);
    session.select_region(Some(Region::UnitedStates));

    let result = session.submit(ForecastVariant::Multivariate).await.unwrap();
    assert_eq!(result.region(), Some(Region::UnitedStates));
    assert_eq!(result.error_metric(), Some(4.2));
}

#[tokio::test]
async fn test_malformed_payload_keeps_previous_result() {
    let mut session = session_with(vec![
        univariate_ok(),
        Ok(load_fixture_value("service/length_mismatch.json")),
    ]);
    session.submit(ForecastVariant::Univariate).await.unwrap();
    let before = session.current().cloned();

    let err = session
        .submit(ForecastVariant::Univariate)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SalescastError::MalformedPayload(PayloadError::LengthMismatch { .. })
    ));
    assert_eq!(session.current().cloned(), before);
    assert!(session.chart().is_mounted());
}

#[tokio::test]
async fn test_service_rejection_keeps_previous_result() {
    let rejection: SalescastResult<Value> = Err(ServiceError::Rejected {
        status: 400,
        message: "Not enough data. Need at least 50 observations.".into(),
    }
    .into());
    let mut session = session_with(vec![univariate_ok(), rejection]);
    session.submit(ForecastVariant::Univariate).await.unwrap();

    let err = session
        .submit(ForecastVariant::Univariate)
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert!(session.current().is_some());
    assert_eq!(session.context().requests_made, 2);
}

#[tokio::test]
async fn test_views_require_a_result() {
    let session = session_with(vec![]);
    assert_eq!(session.rows().unwrap_err(), SessionError::NoResult);
    assert_eq!(session.table().unwrap_err(), SessionError::NoResult);
}

// ─── Export ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_export_with_real_snapshotter() {
    let mut session = session_with(vec![univariate_ok()]);
    session.submit(ForecastVariant::Univariate).await.unwrap();

    let artifacts = session
        .export(ExportFormats::all(), &PlottersSnapshotter::new())
        .await
        .unwrap();
    assert!(artifacts.pdf.as_deref().unwrap().starts_with(b"%PDF-"));
    assert!(artifacts.chart_png.is_some());
}

#[tokio::test]
async fn test_export_survives_snapshot_failure() {
    let mut session = session_with(vec![univariate_ok()]);
    session.submit(ForecastVariant::Univariate).await.unwrap();

    let artifacts = session
        .export(ExportFormats::all(), &BrokenSnapshotter)
        .await
        .unwrap();
    assert!(artifacts.pdf.is_some());
    assert!(artifacts.csv.is_some());
    assert!(artifacts.chart_png.is_none());
}

#[tokio::test]
async fn test_export_without_result_fails() {
    let session = session_with(vec![]);
    let err = session
        .export(ExportFormats::all(), &PlottersSnapshotter::new())
        .await
        .unwrap_err();
    assert_eq!(err, SalescastError::Session(SessionError::NoResult));
}

// ─── Archive ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_failed_save_is_retryable_and_result_kept() {
    let archive = FlakyArchive {
        fail: Cell::new(true),
        inner: InMemoryArchive::new(),
    };
    let mut session = ForecastSession::new(
        ScriptedService::replying(vec![univariate_ok()]),
        archive,
        &small_config(),
    );
    session.select_file(DatasetUpload::new("sales.csv", sample_sales_csv()));
    session.submit(ForecastVariant::Univariate).await.unwrap();

    let err = session.save().await.unwrap_err();
    assert!(matches!(err, SalescastError::ArchiveUnavailable(_)));
    assert!(err.is_retryable());
    assert!(session.current().is_some());
}

#[tokio::test]
async fn test_save_then_list() {
    let mut session = session_with(vec![univariate_ok()]);
    session.submit(ForecastVariant::Univariate).await.unwrap();

    let ack = session.save().await.unwrap();
    assert_eq!(ack.id, Some(1));

    let saved = session.saved().await.unwrap();
    assert!(saved.is_clean());
    assert_eq!(saved.data.len(), 1);
    let current = session.current().unwrap();
    assert_eq!(saved.data[0].file_name(), current.file_name());
    assert_eq!(saved.data[0].point_forecast(), current.point_forecast());
    assert_eq!(
        saved.data[0].confidence_intervals(),
        current.confidence_intervals()
    );
}

#[tokio::test]
async fn test_save_without_result_fails() {
    let session = session_with(vec![]);
    let err = session.save().await.unwrap_err();
    assert_eq!(err, SalescastError::Session(SessionError::NoResult));
}

// ─── Isolation ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let mut first = session_with(vec![univariate_ok()]);
    let second = session_with(vec![]);
    first.submit(ForecastVariant::Univariate).await.unwrap();

    assert!(first.current().is_some());
    assert!(second.current().is_none());
    assert_ne!(first.context().session_id, second.context().session_id);
}
