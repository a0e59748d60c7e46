//! Top-level Salescast configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, ChartConfig, ExportConfig, ForecastConfig, ServiceConfig};
use crate::errors::ConfigError;
use crate::models::Region;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "salescast.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SALESCAST_*`)
/// 3. Project config (`salescast.toml` in the project root)
/// 4. User config (`~/.salescast/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SalescastConfig {
    pub service: ServiceConfig,
    pub export: ExportConfig,
    pub chart: ChartConfig,
    pub forecast: ForecastConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub service_url: Option<String>,
    pub output_dir: Option<String>,
    pub default_region: Option<String>,
}

impl SalescastConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only parse failures are fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!("config: ignoring user config: {e}");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SalescastConfig) -> Result<(), ConfigError> {
        if let Some(ref url) = config.service.base_url {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "service.base_url".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.service.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "service.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(decimals) = config.export.table_decimals {
            if decimals > defaults::MAX_TABLE_DECIMALS {
                return Err(ConfigError::ValidationFailed {
                    field: "export.table_decimals".to_string(),
                    message: format!("must be at most {}", defaults::MAX_TABLE_DECIMALS),
                });
            }
        }
        if config.chart.width_px == Some(0) || config.chart.height_px == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "chart".to_string(),
                message: "dimensions must be greater than 0".to_string(),
            });
        }
        if let Some(ref code) = config.forecast.default_region {
            if Region::from_code(code).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "forecast.default_region".to_string(),
                    message: format!("unsupported region code {code}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.salescast/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".salescast").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SalescastConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SalescastConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut SalescastConfig, other: &SalescastConfig) {
        // Service
        if other.service.base_url.is_some() {
            base.service.base_url = other.service.base_url.clone();
        }
        if other.service.univariate_path.is_some() {
            base.service.univariate_path = other.service.univariate_path.clone();
        }
        if other.service.multivariate_path.is_some() {
            base.service.multivariate_path = other.service.multivariate_path.clone();
        }
        if other.service.save_path.is_some() {
            base.service.save_path = other.service.save_path.clone();
        }
        if other.service.list_path.is_some() {
            base.service.list_path = other.service.list_path.clone();
        }
        if other.service.timeout_secs.is_some() {
            base.service.timeout_secs = other.service.timeout_secs;
        }

        // Export
        if other.export.output_dir.is_some() {
            base.export.output_dir = other.export.output_dir.clone();
        }
        if other.export.table_decimals.is_some() {
            base.export.table_decimals = other.export.table_decimals;
        }
        if other.export.page_size.is_some() {
            base.export.page_size = other.export.page_size;
        }
        if other.export.embed_chart.is_some() {
            base.export.embed_chart = other.export.embed_chart;
        }

        // Chart
        if other.chart.width_px.is_some() {
            base.chart.width_px = other.chart.width_px;
        }
        if other.chart.height_px.is_some() {
            base.chart.height_px = other.chart.height_px;
        }

        // Forecast
        if other.forecast.default_region.is_some() {
            base.forecast.default_region = other.forecast.default_region.clone();
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut SalescastConfig) {
        if let Ok(val) = std::env::var("SALESCAST_SERVICE_URL") {
            config.service.base_url = Some(val);
        }
        if let Ok(val) = std::env::var("SALESCAST_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.service.timeout_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SALESCAST_OUTPUT_DIR") {
            config.export.output_dir = Some(val);
        }
        if let Ok(val) = std::env::var("SALESCAST_DEFAULT_REGION") {
            config.forecast.default_region = Some(val);
        }
        if let Ok(val) = std::env::var("SALESCAST_TABLE_DECIMALS") {
            if let Ok(v) = val.parse::<usize>() {
                config.export.table_decimals = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SalescastConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.service_url {
            config.service.base_url = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.export.output_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.default_region {
            config.forecast.default_region = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
