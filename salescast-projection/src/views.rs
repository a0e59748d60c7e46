//! Saved-result views: a compact thumbnail for lists and a detail view with
//! the full table.

use std::fmt;

use chrono::Local;
use salescast_core::ForecastResult;

use crate::table::Table;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One entry of the saved-results list.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailView {
    pub title: String,
    pub region_line: Option<String>,
    pub file_line: String,
    pub timestamp_line: String,
    pub sparkline: String,
}

impl ThumbnailView {
    pub fn from_result(result: &ForecastResult) -> Self {
        Self {
            title: result.variant().display_name().to_string(),
            region_line: result.region().map(|r| format!("Region: {}", r.code())),
            file_line: format!("File: {}", result.display_file_name()),
            timestamp_line: result
                .timestamp()
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            sparkline: sparkline(result.point_forecast()),
        }
    }
}

impl fmt::Display for ThumbnailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(ref region) = self.region_line {
            writeln!(f, "  {region}")?;
        }
        writeln!(f, "  {}", self.file_line)?;
        writeln!(f, "  {}", self.timestamp_line)?;
        write!(f, "  {}", self.sparkline)
    }
}

/// Full view of one saved result.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub model: String,
    pub region_line: Option<String>,
    pub file_line: String,
    /// `RMSE: x.xxxx`, only when the result has an error metric.
    pub rmse_line: Option<String>,
    pub table: Table,
}

impl DetailView {
    pub fn from_result(result: &ForecastResult, decimals: usize) -> Self {
        Self {
            model: result.variant().display_name().to_string(),
            region_line: result.region().map(|r| format!("Region: {}", r.code())),
            file_line: format!("File: {}", result.display_file_name()),
            rmse_line: result.error_metric().map(|m| format!("RMSE: {m:.4}")),
            table: Table::build(result, decimals),
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.model)?;
        if let Some(ref region) = self.region_line {
            writeln!(f, "{region}")?;
        }
        writeln!(f, "{}", self.file_line)?;
        if let Some(ref rmse) = self.rmse_line {
            writeln!(f, "{rmse}")?;
        }
        writeln!(f)?;
        f.write_str(&self.table.render_text())
    }
}

/// Block-character sparkline scaled between the series min and max.
/// A flat series renders at mid height.
pub fn sparkline(values: &[f64]) -> String {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    let top = SPARK_LEVELS.len() - 1;
    values
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                ' '
            } else if span <= f64::EPSILON {
                SPARK_LEVELS[top / 2]
            } else {
                let level = ((v - min) / span * top as f64).round() as usize;
                SPARK_LEVELS[level.min(top)]
            }
        })
        .collect()
}
