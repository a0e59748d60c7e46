//! Errors raised by a forecast session before any request is made.

use super::error_code::{self, SalescastErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please select a file first")]
    NoFile,

    #[error("a region must be selected for the multivariate forecast")]
    RegionRequired,

    #[error("no forecast is currently open")]
    NoResult,
}

impl SalescastErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        error_code::SESSION_ERROR
    }
}
