//! Wire shapes shared by the forecast service and the archive.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header carrying the client-generated request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Error body both endpoints send with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// The `error` message of `body`, if it is an error body.
    pub fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Fresh id for tracing one request across client and server logs.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}
