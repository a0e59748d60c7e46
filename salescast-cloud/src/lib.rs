//! # salescast-cloud
//!
//! Remote collaborators of the pipeline: the forecast service (multipart
//! dataset upload) and the forecast archive (JSON save/list). Both sit on one
//! async reqwest transport. Neither retries on its own; a failed call is
//! reported once and the caller decides.

pub mod archive;
pub mod memory;
pub mod service;
pub mod transport;

pub use archive::HttpArchive;
pub use memory::InMemoryArchive;
pub use service::ForecastServiceClient;
pub use transport::{HttpClient, HttpClientConfig, HttpResponse};
