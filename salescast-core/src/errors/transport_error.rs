//! Network-level failures on any asynchronous call.

use super::error_code::{self, SalescastErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("could not build request: {reason}")]
    Request { reason: String },

    #[error("connection failed: {reason}")]
    Connect { reason: String },

    #[error("request timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response body could not be decoded: {reason}")]
    Decode { reason: String },
}

impl SalescastErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        error_code::TRANSPORT_ERROR
    }
}
