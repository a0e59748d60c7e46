//! Confidence-interval parsing.
//!
//! Two shapes are accepted: a list of `[lower, upper]` pairs, or an object
//! with parallel `lower` and `upper` lists. Either bound may be `null`.

use salescast_core::errors::PayloadError;
use salescast_core::ConfidenceInterval;
use serde_json::Value;

use crate::fields::as_number;

/// Parse an interval value found under `field`. `null` means absent.
pub fn parse_intervals(
    field: &str,
    value: &Value,
) -> Result<Option<Vec<ConfidenceInterval>>, PayloadError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(pairs) => pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| parse_pair(index, pair))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Value::Object(bounds) => {
            let lower = bound_column(field, "lower", bounds.get("lower"))?;
            let upper = bound_column(field, "upper", bounds.get("upper"))?;
            if lower.len() != upper.len() {
                return Err(PayloadError::LengthMismatch {
                    field: format!("{field}.upper"),
                    expected: lower.len(),
                    actual: upper.len(),
                });
            }
            Ok(Some(
                lower
                    .into_iter()
                    .zip(upper)
                    .map(ConfidenceInterval::from)
                    .collect(),
            ))
        }
        _ => Err(PayloadError::NotASequence {
            field: field.to_string(),
        }),
    }
}

fn parse_pair(index: usize, pair: &Value) -> Result<ConfidenceInterval, PayloadError> {
    let bounds = pair.as_array().ok_or_else(|| PayloadError::InvalidInterval {
        index,
        reason: "expected a [lower, upper] pair".to_string(),
    })?;
    if bounds.len() != 2 {
        return Err(PayloadError::InvalidInterval {
            index,
            reason: format!("expected 2 bounds, got {}", bounds.len()),
        });
    }
    Ok(ConfidenceInterval {
        lower: parse_bound(index, &bounds[0])?,
        upper: parse_bound(index, &bounds[1])?,
    })
}

fn parse_bound(index: usize, bound: &Value) -> Result<Option<f64>, PayloadError> {
    if bound.is_null() {
        return Ok(None);
    }
    as_number(bound)
        .map(Some)
        .ok_or_else(|| PayloadError::InvalidInterval {
            index,
            reason: "non-numeric bound".to_string(),
        })
}

fn bound_column(
    field: &str,
    side: &str,
    value: Option<&Value>,
) -> Result<Vec<Option<f64>>, PayloadError> {
    let name = format!("{field}.{side}");
    let items = value
        .ok_or_else(|| PayloadError::MissingField {
            field: name.clone(),
        })?
        .as_array()
        .ok_or_else(|| PayloadError::NotASequence {
            field: name.clone(),
        })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_null() {
                Ok(None)
            } else {
                as_number(item)
                    .map(Some)
                    .ok_or_else(|| PayloadError::NotNumeric {
                        field: name.clone(),
                        index,
                    })
            }
        })
        .collect()
}
