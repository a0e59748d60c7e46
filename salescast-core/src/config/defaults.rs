// Single source of truth for all default values.

// --- Service ---
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";
pub const DEFAULT_UNIVARIATE_PATH: &str = "/forecast_arima";
pub const DEFAULT_MULTIVARIATE_PATH: &str = "/forecast_rf";
pub const DEFAULT_SAVE_PATH: &str = "/save_forecast";
pub const DEFAULT_LIST_PATH: &str = "/get_saved_forecasts";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// --- Export ---
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_TABLE_DECIMALS: usize = 2;
pub const MAX_TABLE_DECIMALS: usize = 10;
pub const DEFAULT_EMBED_CHART: bool = true;

// --- Chart ---
pub const DEFAULT_CHART_WIDTH_PX: u32 = 1200;
pub const DEFAULT_CHART_HEIGHT_PX: u32 = 600;

// --- Forecast ---
pub const DEFAULT_REGION: &str = "IN";

// --- Observability ---
pub const LOG_ENV_VAR: &str = "SALESCAST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "salescast=info";
