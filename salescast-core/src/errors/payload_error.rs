//! Malformed service payloads and archive records.

use super::error_code::{self, SalescastErrorCode};

/// A raw payload failed the forecast invariants. Fatal to the request that
/// produced it; no partial result is ever built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("field {field} is not a sequence")]
    NotASequence { field: String },

    #[error("non-numeric value in {field} at position {index}")]
    NotNumeric { field: String, index: usize },

    #[error("non-text label in {field} at position {index}")]
    NotText { field: String, index: usize },

    #[error("length mismatch in {field}: expected {expected}, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid confidence interval at position {index}: {reason}")]
    InvalidInterval { index: usize, reason: String },

    #[error("unknown forecast model: {value}")]
    UnknownVariant { value: String },

    #[error("payload reports model {actual}, expected {expected}")]
    VariantMismatch { expected: String, actual: String },

    #[error("multivariate forecast is missing its region")]
    MissingRegion,

    #[error("unsupported region: {code}")]
    UnsupportedRegion { code: String },

    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

impl SalescastErrorCode for PayloadError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_PAYLOAD
    }
}
