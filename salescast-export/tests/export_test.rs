//! ExportEngine tests: column consistency, CSV shape, PDF content, snapshot
//! downgrade, and artifact writing.

use chrono::Utc;

use salescast_core::config::ExportConfig;
use salescast_core::errors::SnapshotError;
use salescast_core::traits::IChartSnapshotter;
use salescast_core::{
    ChartSnapshot, ConfidenceInterval, ForecastResult, ForecastSeries, ForecastVariant, Region,
};
use salescast_export::{ExportArtifacts, ExportEngine, ExportFormats, PdfReport};
use salescast_normalize::ResultNormalizer;
use salescast_projection::ColumnSet;
use test_fixtures::load_fixture_value;

// ─── Stubs ────────────────────────────────────────────────────────────────

/// Hands back a fixed snapshot, or fails when `fail` is set.
struct StubSnapshotter {
    fail: bool,
}

impl IChartSnapshotter for StubSnapshotter {
    type Handle = ();

    async fn capture(&self, _chart: &()) -> Result<ChartSnapshot, SnapshotError> {
        if self.fail {
            Err(SnapshotError::NotMounted)
        } else {
            Ok(tiny_png())
        }
    }
}

/// A 1x1 white RGB PNG.
fn tiny_png() -> ChartSnapshot {
    let bytes = vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0xFF, 0xFF, 0x3F, 0x00, 0x05, 0xFE, 0x02, 0xFE, 0xDC, 0xCC, 0x59, 0xE7, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];
    ChartSnapshot::new(bytes, 1, 1)
}

// ─── Helpers ──────────────────────────────────────────────────────────────

fn two_steps() -> ForecastSeries {
    ForecastSeries::new(
        vec!["2024-01-01".into(), "2024-01-02".into()],
        vec![10.0, 12.5],
    )
    .unwrap()
}

fn univariate_with_ci() -> ForecastResult {
    ForecastResult::univariate(
        two_steps(),
        Some(vec![
            ConfidenceInterval::new(9.0, 11.0),
            ConfidenceInterval::new(11.5, 13.5),
        ]),
        "sales.csv",
        Utc::now(),
        None,
    )
    .unwrap()
}

fn multivariate_rmse() -> ForecastResult {
    ForecastResult::multivariate(
        two_steps(),
        Some(Region::UnitedStates),
        "stores.csv",
        Utc::now(),
        Some(4.2),
    )
}

fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}

// ─── CSV ──────────────────────────────────────────────────────────────────

#[test]
fn test_csv_with_intervals() {
    let export = ExportEngine::default()
        .export_csv(&univariate_with_ci(), None)
        .unwrap();
    assert_eq!(
        export.csv,
        "Date,Forecast,Lower CI,Upper CI\n2024-01-01,10,9,11\n2024-01-02,12.5,11.5,13.5\n"
    );
    assert!(export.chart.is_none());
}

#[test]
fn test_csv_without_intervals_has_two_columns() {
    let export = ExportEngine::default()
        .export_csv(&multivariate_rmse(), None)
        .unwrap();
    let lines: Vec<&str> = export.csv.lines().collect();
    assert_eq!(lines, ["Date,Forecast", "2024-01-01,10", "2024-01-02,12.5"]);
}

#[test]
fn test_csv_keeps_full_precision() {
    let series = ForecastSeries::new(vec!["2024-01-01".into()], vec![1.23456789]).unwrap();
    let result = ForecastResult::univariate(series, None, "p.csv", Utc::now(), None).unwrap();
    let export = ExportEngine::default().export_csv(&result, None).unwrap();
    assert!(export.csv.contains("1.23456789"));
}

#[test]
fn test_csv_null_bounds_are_empty_fields() {
    let raw = load_fixture_value("service/univariate_null_bounds.json");
    let result = ResultNormalizer::new()
        .normalize(&raw, ForecastVariant::Univariate, "a.csv")
        .unwrap();
    let export = ExportEngine::default().export_csv(&result, None).unwrap();
    assert_eq!(export.csv.lines().nth(1), Some("2024-01-01,10,,"));
}

#[test]
fn test_csv_header_matches_column_set() {
    for result in [univariate_with_ci(), multivariate_rmse()] {
        let export = ExportEngine::default().export_csv(&result, None).unwrap();
        let header = export.csv.lines().next().unwrap().to_string();
        assert_eq!(header, ColumnSet::for_result(&result).headers().join(","));
    }
}

#[test]
fn test_csv_carries_companion_image() {
    let export = ExportEngine::default()
        .export_csv(&univariate_with_ci(), Some(tiny_png()))
        .unwrap();
    assert_eq!(export.chart, Some(tiny_png()));
}

#[test]
fn test_csv_drops_image_when_embedding_disabled() {
    let config = ExportConfig {
        embed_chart: Some(false),
        ..Default::default()
    };
    let export = ExportEngine::new(&config)
        .export_csv(&univariate_with_ci(), Some(tiny_png()))
        .unwrap();
    assert!(export.chart.is_none());
}

// ─── PDF ──────────────────────────────────────────────────────────────────

#[test]
fn test_report_for_multivariate_with_rmse() {
    let report = PdfReport::build(&multivariate_rmse(), 2);
    assert_eq!(report.title, "Multivariate Forecast Report");
    assert!(report.summary.contains("RMSE: 4.20"));
    assert!(report.summary.contains("Region: US"));
    assert_eq!(report.headers, ["Date", "Forecast"]);
    assert!(report.rows.iter().all(|r| r.len() == 2));
}

#[test]
fn test_report_without_metric_has_no_rmse() {
    let report = PdfReport::build(&univariate_with_ci(), 2);
    assert!(!report.summary.contains("RMSE"));
    assert_eq!(report.headers, ["Date", "Forecast", "Lower CI", "Upper CI"]);
    assert_eq!(report.rows[0], ["2024-01-01", "10.00", "9.00", "11.00"]);
}

#[test]
fn test_report_uses_configured_decimals() {
    let report = PdfReport::build(&univariate_with_ci(), 0);
    assert_eq!(report.rows[1][1], "12");
}

#[test]
fn test_pdf_without_snapshot_is_valid() {
    let bytes = ExportEngine::default()
        .export_pdf(&multivariate_rmse(), None)
        .unwrap();
    assert!(is_pdf(&bytes));
}

#[test]
fn test_pdf_with_snapshot_is_valid() {
    let bytes = ExportEngine::default()
        .export_pdf(&univariate_with_ci(), Some(&tiny_png()))
        .unwrap();
    assert!(is_pdf(&bytes));
}

#[test]
fn test_pdf_with_undecodable_snapshot_still_renders() {
    let garbage = ChartSnapshot::new(vec![1, 2, 3], 10, 10);
    let bytes = ExportEngine::default()
        .export_pdf(&univariate_with_ci(), Some(&garbage))
        .unwrap();
    assert!(is_pdf(&bytes));
}

#[test]
fn test_pdf_with_very_tall_snapshot_still_renders() {
    let tall = ChartSnapshot::new(tiny_png().into_png(), 10, 4000);
    let bytes = ExportEngine::default()
        .export_pdf(&univariate_with_ci(), Some(&tall))
        .unwrap();
    assert!(is_pdf(&bytes));
}

#[test]
fn test_pdf_long_table_spans_pages() {
    let n = 200;
    let dates = (0..n).map(|i| format!("step {i}")).collect();
    let series = ForecastSeries::new(dates, vec![1.0; n]).unwrap();
    let result = ForecastResult::univariate(series, None, "long.csv", Utc::now(), None).unwrap();
    let bytes = ExportEngine::default().export_pdf(&result, None).unwrap();
    assert!(is_pdf(&bytes));
}

// ─── Snapshot downgrade ───────────────────────────────────────────────────

#[tokio::test]
async fn test_failed_snapshot_does_not_block_export() {
    let artifacts = ExportEngine::default()
        .export(
            &univariate_with_ci(),
            ExportFormats::all(),
            &StubSnapshotter { fail: true },
            &(),
        )
        .await
        .unwrap();

    assert!(is_pdf(artifacts.pdf.as_deref().unwrap()));
    assert!(artifacts
        .csv
        .as_deref()
        .unwrap()
        .starts_with("Date,Forecast,Lower CI,Upper CI\n"));
    assert!(artifacts.chart_png.is_none());
}

#[tokio::test]
async fn test_successful_snapshot_ships_with_csv() {
    let artifacts = ExportEngine::default()
        .export(
            &multivariate_rmse(),
            ExportFormats {
                pdf: false,
                csv: true,
            },
            &StubSnapshotter { fail: false },
            &(),
        )
        .await
        .unwrap();

    assert!(artifacts.pdf.is_none());
    assert_eq!(artifacts.chart_png.as_deref(), Some(tiny_png().png()));
}

#[tokio::test]
async fn test_capture_skipped_when_embedding_disabled() {
    let engine = ExportEngine::new(&ExportConfig {
        embed_chart: Some(false),
        ..Default::default()
    });
    let snapshot = engine
        .capture_chart(&StubSnapshotter { fail: false }, &())
        .await;
    assert!(snapshot.is_none());
}

#[tokio::test]
async fn test_no_formats_no_artifacts() {
    let artifacts = ExportEngine::default()
        .export(
            &multivariate_rmse(),
            ExportFormats::default(),
            &StubSnapshotter { fail: false },
            &(),
        )
        .await
        .unwrap();
    assert!(artifacts.is_empty());
}

// ─── Artifact writing ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_write_artifacts_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("exports");

    let artifacts = ExportEngine::default()
        .export(
            &univariate_with_ci(),
            ExportFormats::all(),
            &StubSnapshotter { fail: false },
            &(),
        )
        .await
        .unwrap();
    let written = artifacts.write_to(&out).await.unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "univariate_forecast.pdf",
            "univariate_forecast.csv",
            "univariate_forecast_chart.png"
        ]
    );
    let csv = std::fs::read_to_string(out.join("univariate_forecast.csv")).unwrap();
    assert!(csv.starts_with("Date,Forecast"));
}

#[tokio::test]
async fn test_write_empty_artifacts_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never-created");
    let written = ExportArtifacts::new(ForecastVariant::Multivariate)
        .write_to(&out)
        .await
        .unwrap();
    assert!(written.is_empty());
    assert!(!out.exists());
}

#[test]
fn test_artifact_names_follow_variant() {
    let artifacts = ExportArtifacts::new(ForecastVariant::Multivariate);
    assert_eq!(artifacts.pdf_file_name(), "multivariate_forecast.pdf");
    assert_eq!(artifacts.csv_file_name(), "multivariate_forecast.csv");
    assert_eq!(artifacts.chart_file_name(), "multivariate_forecast_chart.png");
}
