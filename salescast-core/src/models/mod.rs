//! Domain models for forecast results, uploads, snapshots, and archive acks.

pub mod forecast_result;
pub mod region;
pub mod save_ack;
pub mod snapshot;
pub mod upload;
pub mod variant;

pub use forecast_result::{
    ConfidenceInterval, ForecastRecord, ForecastResult, ForecastSeries, VariantDetail,
};
pub use region::Region;
pub use save_ack::SaveAck;
pub use snapshot::ChartSnapshot;
pub use upload::{DatasetUpload, ForecastRequest};
pub use variant::ForecastVariant;
