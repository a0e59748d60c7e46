//! Archive save/list errors. Retryable; the in-memory result is untouched.

use super::error_code::{self, SalescastErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive unreachable: {reason}")]
    Unavailable { reason: String },

    #[error("archive returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("archive response could not be read: {reason}")]
    InvalidResponse { reason: String },
}

impl SalescastErrorCode for ArchiveError {
    fn error_code(&self) -> &'static str {
        error_code::ARCHIVE_UNAVAILABLE
    }
}
