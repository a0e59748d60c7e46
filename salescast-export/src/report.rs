//! PdfReport: the text content of a PDF report, independent of layout.

use salescast_core::{ForecastResult, ForecastVariant};
use salescast_projection::Table;

/// Title, summary, and table cells of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfReport {
    pub title: String,
    /// Model-specific summary; the error metric appears only when present.
    pub summary: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PdfReport {
    pub fn build(result: &ForecastResult, decimals: usize) -> Self {
        let table = Table::build(result, decimals);
        Self {
            title: format!("{} Report", result.variant().display_name()),
            summary: summary_line(result),
            headers: table.headers().iter().map(|h| h.to_string()).collect(),
            rows: table.rows().to_vec(),
        }
    }
}

fn summary_line(result: &ForecastResult) -> String {
    let mut parts = vec![format!("File: {}", result.display_file_name())];
    match result.variant() {
        ForecastVariant::Univariate => {
            parts.push(format!("Steps: {}", result.len()));
            if result.has_confidence_intervals() {
                parts.push("With confidence intervals".to_string());
            }
        }
        ForecastVariant::Multivariate => {
            if let Some(region) = result.region() {
                parts.push(format!("Region: {} ({})", region.code(), region.name()));
            }
            parts.push(format!("Steps: {}", result.len()));
        }
    }
    if let Some(rmse) = result.error_metric() {
        parts.push(format!("RMSE: {rmse:.2}"));
    }
    parts.join(" | ")
}
