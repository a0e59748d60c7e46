//! # salescast-core
//!
//! Foundation crate for the Salescast forecast pipeline.
//! Defines the canonical forecast model, errors, config, traits, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::SalescastConfig;
pub use errors::{SalescastError, SalescastResult};
pub use models::{
    ChartSnapshot, ConfidenceInterval, DatasetUpload, ForecastRequest, ForecastResult,
    ForecastSeries, ForecastVariant, Region, SaveAck, VariantDetail,
};
