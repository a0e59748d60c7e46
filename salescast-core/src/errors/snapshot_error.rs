//! Chart capture errors. Never fatal to an export.

use super::error_code::{self, SalescastErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("chart is not mounted")]
    NotMounted,

    #[error("chart rendering failed: {reason}")]
    Render { reason: String },

    #[error("chart image encoding failed: {reason}")]
    Encode { reason: String },
}

impl SalescastErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_UNAVAILABLE
    }
}
