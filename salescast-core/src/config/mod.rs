//! Configuration system for Salescast.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod chart_config;
pub mod defaults;
pub mod export_config;
pub mod forecast_config;
pub mod salescast_config;
pub mod service_config;

pub use chart_config::ChartConfig;
pub use export_config::{ExportConfig, PageSize};
pub use forecast_config::ForecastConfig;
pub use salescast_config::{CliOverrides, SalescastConfig};
pub use service_config::ServiceConfig;
