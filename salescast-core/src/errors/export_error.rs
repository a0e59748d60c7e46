//! Artifact generation errors.

use super::error_code::{self, SalescastErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("PDF generation failed: {reason}")]
    Pdf { reason: String },

    #[error("CSV generation failed: {reason}")]
    Csv { reason: String },

    #[error("could not write {path}: {reason}")]
    Io { path: String, reason: String },
}

impl SalescastErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
