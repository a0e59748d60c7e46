//! Capability traits at the seams between the pipeline and its collaborators.

pub mod archive;
pub mod forecast_service;
pub mod snapshotter;

pub use archive::IForecastArchive;
pub use forecast_service::IForecastService;
pub use snapshotter::IChartSnapshotter;
