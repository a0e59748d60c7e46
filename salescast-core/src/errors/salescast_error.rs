//! Aggregate error for the whole pipeline.

use super::error_code::SalescastErrorCode;
use super::{
    ArchiveError, ConfigError, ExportError, PayloadError, ServiceError, SessionError,
    SnapshotError, TransportError,
};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SalescastError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] PayloadError),

    #[error("Snapshot unavailable: {0}")]
    SnapshotUnavailable(#[from] SnapshotError),

    #[error("Archive unavailable: {0}")]
    ArchiveUnavailable(#[from] ArchiveError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl SalescastError {
    /// Whether re-submitting the same request may succeed. The core never
    /// retries on its own; this only drives the wording shown to the user.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ArchiveUnavailable(_) | Self::Transport(_) | Self::Service(_)
        )
    }
}

impl SalescastErrorCode for SalescastError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedPayload(e) => e.error_code(),
            Self::SnapshotUnavailable(e) => e.error_code(),
            Self::ArchiveUnavailable(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
        }
    }
}

pub type SalescastResult<T> = Result<T, SalescastError>;
