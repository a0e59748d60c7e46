//! Alias-aware field lookup and typed extraction from JSON objects.

use salescast_core::errors::PayloadError;
use serde_json::{Map, Value};

/// Accepted keys for the point forecast, in lookup order.
pub const FORECAST_KEYS: &[&str] = &["forecast", "predictions", "point_forecast", "yhat"];
/// Accepted keys for the time index.
pub const TIME_INDEX_KEYS: &[&str] = &["forecast_index", "dates", "index", "ds"];
/// Accepted keys for the confidence intervals.
pub const INTERVAL_KEYS: &[&str] = &["confidence_intervals", "conf_int", "confidence_interval"];
/// Accepted keys for the error metric.
pub const ERROR_METRIC_KEYS: &[&str] = &["rmse", "error_metric"];
/// Accepted keys for the region code.
pub const REGION_KEYS: &[&str] = &["region", "country"];
pub const MODEL_NAME_KEYS: &[&str] = &["model_name", "model"];
pub const FILE_NAME_KEYS: &[&str] = &["file_name", "fileName"];
pub const TIMESTAMP_KEYS: &[&str] = &["timestamp", "saved_at"];

/// First present, non-null value among `keys`, with the key it was found under.
pub fn lookup<'a>(
    obj: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter()
        .find_map(|k| obj.get(*k).filter(|v| !v.is_null()).map(|v| (*k, v)))
}

/// Coerce a JSON number or numeric string into a finite `f64`.
/// `"NaN"` and `"inf"` parse as floats but have no JSON encoding, so they are rejected.
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// A required numeric sequence. Nulls are rejected: every step needs a value.
pub fn number_sequence(field: &str, value: &Value) -> Result<Vec<f64>, PayloadError> {
    let items = value.as_array().ok_or_else(|| PayloadError::NotASequence {
        field: field.to_string(),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            as_number(item).ok_or_else(|| PayloadError::NotNumeric {
                field: field.to_string(),
                index,
            })
        })
        .collect()
}

/// A sequence of labels. Numbers are accepted and rendered as text.
pub fn label_sequence(field: &str, value: &Value) -> Result<Vec<String>, PayloadError> {
    let items = value.as_array().ok_or_else(|| PayloadError::NotASequence {
        field: field.to_string(),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(PayloadError::NotText {
                field: field.to_string(),
                index,
            }),
        })
        .collect()
}

/// An optional scalar metric. Null or absent is `None`; anything else must be numeric.
pub fn optional_number(
    obj: &Map<String, Value>,
    keys: &[&'static str],
) -> Result<Option<f64>, PayloadError> {
    match lookup(obj, keys) {
        None => Ok(None),
        Some((key, value)) => as_number(value)
            .map(Some)
            .ok_or_else(|| PayloadError::NotNumeric {
                field: key.to_string(),
                index: 0,
            }),
    }
}

/// An optional text field.
pub fn optional_text<'a>(obj: &'a Map<String, Value>, keys: &[&'static str]) -> Option<&'a str> {
    lookup(obj, keys).and_then(|(_, v)| v.as_str())
}
