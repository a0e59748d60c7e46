//! ForecastResult: the canonical, immutable forecast representation shared
//! by both variants, the exporters, and the archive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ForecastVariant, Region};
use crate::constants::UNNAMED_FILE;
use crate::errors::PayloadError;

/// A (lower, upper) bound pair for one forecast step.
///
/// A bound is `None` when the service reported `null` for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Option<f64>, Option<f64>)", into = "(Option<f64>, Option<f64>)")]
pub struct ConfidenceInterval {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// An interval the service could not compute.
    pub fn unknown() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }
}

impl From<(Option<f64>, Option<f64>)> for ConfidenceInterval {
    fn from((lower, upper): (Option<f64>, Option<f64>)) -> Self {
        Self { lower, upper }
    }
}

impl From<ConfidenceInterval> for (Option<f64>, Option<f64>) {
    fn from(ci: ConfidenceInterval) -> Self {
        (ci.lower, ci.upper)
    }
}

/// The parallel date/value sequences of a forecast. Lengths always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    time_index: Vec<String>,
    point_forecast: Vec<f64>,
}

impl ForecastSeries {
    /// Pair a time index with its forecast values.
    ///
    /// Fails when the lengths differ; nothing is truncated.
    pub fn new(time_index: Vec<String>, point_forecast: Vec<f64>) -> Result<Self, PayloadError> {
        if point_forecast.len() != time_index.len() {
            return Err(PayloadError::LengthMismatch {
                field: "forecast".to_string(),
                expected: time_index.len(),
                actual: point_forecast.len(),
            });
        }
        Ok(Self {
            time_index,
            point_forecast,
        })
    }

    pub fn time_index(&self) -> &[String] {
        &self.time_index
    }

    pub fn point_forecast(&self) -> &[f64] {
        &self.point_forecast
    }

    pub fn len(&self) -> usize {
        self.time_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_index.is_empty()
    }
}

/// Variant-specific part of a result.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantDetail {
    Univariate {
        /// `None` when the service sent no intervals (or an empty list).
        confidence_intervals: Option<Vec<ConfidenceInterval>>,
    },
    Multivariate {
        /// `None` only for archived records saved without one.
        region: Option<Region>,
    },
}

impl VariantDetail {
    pub fn variant(&self) -> ForecastVariant {
        match self {
            Self::Univariate { .. } => ForecastVariant::Univariate,
            Self::Multivariate { .. } => ForecastVariant::Multivariate,
        }
    }
}

/// A normalized forecast. Immutable once built: every accessor borrows.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    detail: VariantDetail,
    file_name: String,
    timestamp: DateTime<Utc>,
    series: ForecastSeries,
    error_metric: Option<f64>,
}

impl ForecastResult {
    /// Build a univariate result. An empty interval list is treated as absent;
    /// any other length must match the series exactly.
    pub fn univariate(
        series: ForecastSeries,
        confidence_intervals: Option<Vec<ConfidenceInterval>>,
        file_name: impl Into<String>,
        timestamp: DateTime<Utc>,
        error_metric: Option<f64>,
    ) -> Result<Self, PayloadError> {
        let confidence_intervals = match confidence_intervals {
            Some(cis) if cis.is_empty() => None,
            Some(cis) if cis.len() != series.len() => {
                return Err(PayloadError::LengthMismatch {
                    field: "confidence_intervals".to_string(),
                    expected: series.len(),
                    actual: cis.len(),
                });
            }
            other => other,
        };
        Ok(Self {
            detail: VariantDetail::Univariate {
                confidence_intervals,
            },
            file_name: file_name.into(),
            timestamp,
            series,
            error_metric,
        })
    }

    /// Build a multivariate result. Multivariate results never carry intervals.
    pub fn multivariate(
        series: ForecastSeries,
        region: Option<Region>,
        file_name: impl Into<String>,
        timestamp: DateTime<Utc>,
        error_metric: Option<f64>,
    ) -> Self {
        Self {
            detail: VariantDetail::Multivariate { region },
            file_name: file_name.into(),
            timestamp,
            series,
            error_metric,
        }
    }

    pub fn variant(&self) -> ForecastVariant {
        self.detail.variant()
    }

    pub fn detail(&self) -> &VariantDetail {
        &self.detail
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name for display, `Unnamed` when the user supplied none.
    pub fn display_file_name(&self) -> &str {
        if self.file_name.trim().is_empty() {
            UNNAMED_FILE
        } else {
            &self.file_name
        }
    }

    pub fn region(&self) -> Option<Region> {
        match &self.detail {
            VariantDetail::Multivariate { region } => *region,
            VariantDetail::Univariate { .. } => None,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn series(&self) -> &ForecastSeries {
        &self.series
    }

    pub fn time_index(&self) -> &[String] {
        self.series.time_index()
    }

    pub fn point_forecast(&self) -> &[f64] {
        self.series.point_forecast()
    }

    pub fn confidence_intervals(&self) -> Option<&[ConfidenceInterval]> {
        match &self.detail {
            VariantDetail::Univariate {
                confidence_intervals: Some(cis),
            } => Some(cis.as_slice()),
            _ => None,
        }
    }

    /// The single presence check that decides whether CI columns exist
    /// anywhere downstream (table, chart band, PDF, CSV).
    pub fn has_confidence_intervals(&self) -> bool {
        self.confidence_intervals().is_some()
    }

    pub fn error_metric(&self) -> Option<f64> {
        self.error_metric
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Wire record used by the archive save endpoint.
    pub fn to_record(&self) -> ForecastRecord {
        ForecastRecord {
            model_name: self.variant().wire_name().to_string(),
            file_name: self.file_name.clone(),
            region: self.region(),
            timestamp: self.timestamp,
            forecast_index: self.series.time_index.clone(),
            forecast: self.series.point_forecast.clone(),
            confidence_intervals: self.confidence_intervals().map(<[_]>::to_vec),
            rmse: self.error_metric,
        }
    }
}

/// Snake-case record shape shared with the forecast service and the archive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRecord {
    pub model_name: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub timestamp: DateTime<Utc>,
    pub forecast_index: Vec<String>,
    pub forecast: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_intervals: Option<Vec<ConfidenceInterval>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rmse: Option<f64>,
}
