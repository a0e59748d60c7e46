//! ResultNormalizer: raw JSON in, validated ForecastResult out.

use chrono::Utc;
use salescast_core::errors::PayloadError;
use salescast_core::{ForecastResult, ForecastSeries, ForecastVariant, Region};
use serde_json::{Map, Value};
use tracing::debug;

use crate::fields::{
    self, lookup, ERROR_METRIC_KEYS, FILE_NAME_KEYS, FORECAST_KEYS, INTERVAL_KEYS,
    MODEL_NAME_KEYS, REGION_KEYS, TIMESTAMP_KEYS, TIME_INDEX_KEYS,
};
use crate::intervals::parse_intervals;
use crate::timestamp::parse_timestamp;

/// Converts service responses and archived records into [`ForecastResult`]s.
///
/// Stateless; every call validates its input from scratch and either returns
/// a complete result or an error. Lengths are never truncated or padded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultNormalizer;

impl ResultNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a fresh service response for `variant`.
    ///
    /// `file_name` is the name the user picked the dataset under; any name in
    /// the payload is ignored. A multivariate payload must name its region.
    pub fn normalize(
        &self,
        raw: &Value,
        variant: ForecastVariant,
        file_name: &str,
    ) -> Result<ForecastResult, PayloadError> {
        self.normalize_with_region(raw, variant, file_name, None)
    }

    /// Like [`normalize`](Self::normalize), but a multivariate payload without a
    /// region falls back to `requested_region`, the region the request was sent with.
    pub fn normalize_with_region(
        &self,
        raw: &Value,
        variant: ForecastVariant,
        file_name: &str,
        requested_region: Option<Region>,
    ) -> Result<ForecastResult, PayloadError> {
        let _span = salescast_core::normalize_span!(variant, file_name).entered();
        let obj = raw.as_object().ok_or(PayloadError::NotAnObject)?;

        if let Some(reported) = fields::optional_text(obj, MODEL_NAME_KEYS) {
            match ForecastVariant::from_model_name(reported) {
                Some(v) if v != variant => {
                    return Err(PayloadError::VariantMismatch {
                        expected: variant.wire_name().to_string(),
                        actual: reported.to_string(),
                    });
                }
                Some(_) => {}
                None => debug!(model_name = reported, "unrecognized model name, trusting endpoint"),
            }
        }

        let region = match variant {
            ForecastVariant::Multivariate => {
                Some(parse_region(obj)?.or(requested_region).ok_or(PayloadError::MissingRegion)?)
            }
            ForecastVariant::Univariate => None,
        };

        build(obj, variant, file_name.to_string(), region)
    }

    /// Normalize a record returned by the archive listing. The record carries
    /// its own model name, file name and timestamp; every optional field may
    /// be missing, including a multivariate record's region.
    pub fn normalize_record(&self, raw: &Value) -> Result<ForecastResult, PayloadError> {
        let obj = raw.as_object().ok_or(PayloadError::NotAnObject)?;

        let model_name =
            fields::optional_text(obj, MODEL_NAME_KEYS).ok_or_else(|| PayloadError::MissingField {
                field: "model_name".to_string(),
            })?;
        let variant: ForecastVariant = model_name.parse()?;
        let file_name = fields::optional_text(obj, FILE_NAME_KEYS)
            .unwrap_or_default()
            .to_string();
        let _span = salescast_core::normalize_span!(variant, file_name).entered();

        let region = match variant {
            ForecastVariant::Multivariate => parse_region(obj)?,
            ForecastVariant::Univariate => None,
        };

        build(obj, variant, file_name, region)
    }
}

fn parse_region(obj: &Map<String, Value>) -> Result<Option<Region>, PayloadError> {
    match fields::optional_text(obj, REGION_KEYS) {
        Some(code) => code.parse().map(Some),
        None => Ok(None),
    }
}

fn build(
    obj: &Map<String, Value>,
    variant: ForecastVariant,
    file_name: String,
    region: Option<Region>,
) -> Result<ForecastResult, PayloadError> {
    let (forecast_key, forecast_value) =
        lookup(obj, FORECAST_KEYS).ok_or_else(|| PayloadError::MissingField {
            field: "forecast".to_string(),
        })?;
    let point_forecast = fields::number_sequence(forecast_key, forecast_value)?;

    let (index_key, index_value) =
        lookup(obj, TIME_INDEX_KEYS).ok_or_else(|| PayloadError::MissingField {
            field: "forecast_index".to_string(),
        })?;
    let time_index = fields::label_sequence(index_key, index_value)?;

    let series = ForecastSeries::new(time_index, point_forecast)?;
    let error_metric = fields::optional_number(obj, ERROR_METRIC_KEYS)?;

    let timestamp = match fields::optional_text(obj, TIMESTAMP_KEYS) {
        Some(text) => parse_timestamp(text)?,
        None => Utc::now(),
    };

    let result = match variant {
        ForecastVariant::Univariate => {
            let intervals = match lookup(obj, INTERVAL_KEYS) {
                Some((key, value)) => parse_intervals(key, value)?,
                None => None,
            };
            ForecastResult::univariate(series, intervals, file_name, timestamp, error_metric)?
        }
        ForecastVariant::Multivariate => {
            if lookup(obj, INTERVAL_KEYS).is_some() {
                debug!("ignoring confidence intervals on a multivariate payload");
            }
            ForecastResult::multivariate(series, region, file_name, timestamp, error_metric)
        }
    };

    debug!(
        steps = result.len(),
        has_intervals = result.has_confidence_intervals(),
        has_error_metric = result.error_metric().is_some(),
        "payload normalized"
    );
    Ok(result)
}
