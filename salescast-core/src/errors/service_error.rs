//! The forecast service understood the upload but refused it.

use super::error_code::{self, SalescastErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("forecast service rejected the upload (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

impl SalescastErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        error_code::SERVICE_REJECTED
    }
}
