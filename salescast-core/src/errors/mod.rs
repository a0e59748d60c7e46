//! Error handling for Salescast.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod archive_error;
pub mod collected;
pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod payload_error;
pub mod salescast_error;
pub mod service_error;
pub mod session_error;
pub mod snapshot_error;
pub mod transport_error;

pub use archive_error::ArchiveError;
pub use collected::Collected;
pub use config_error::ConfigError;
pub use error_code::SalescastErrorCode;
pub use export_error::ExportError;
pub use payload_error::PayloadError;
pub use salescast_error::{SalescastError, SalescastResult};
pub use service_error::ServiceError;
pub use session_error::SessionError;
pub use snapshot_error::SnapshotError;
pub use transport_error::TransportError;
