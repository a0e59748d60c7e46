//! Transport layer: async HTTP client and wire-level message shapes.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpClient, HttpClientConfig, HttpResponse};
pub use protocol::{ErrorBody, REQUEST_ID_HEADER};
