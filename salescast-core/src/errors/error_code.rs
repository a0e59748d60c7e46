//! SalescastErrorCode trait for user-facing error reporting.

/// Every error enum implements this to expose a stable code string
/// alongside its message.
pub trait SalescastErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_PAYLOAD").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted user-facing string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
pub const SNAPSHOT_UNAVAILABLE: &str = "SNAPSHOT_UNAVAILABLE";
pub const ARCHIVE_UNAVAILABLE: &str = "ARCHIVE_UNAVAILABLE";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const SERVICE_REJECTED: &str = "SERVICE_REJECTED";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
