//! Tests for the Salescast configuration system.

use std::sync::Mutex;

use salescast_core::config::{CliOverrides, PageSize, SalescastConfig};
use salescast_core::errors::ConfigError;
use salescast_core::Region;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_salescast_env_vars() {
    for key in [
        "SALESCAST_SERVICE_URL",
        "SALESCAST_TIMEOUT_SECS",
        "SALESCAST_OUTPUT_DIR",
        "SALESCAST_DEFAULT_REGION",
        "SALESCAST_TABLE_DECIMALS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let config = SalescastConfig::default();
    assert_eq!(config.service.effective_base_url(), "http://localhost:5000");
    assert_eq!(config.service.effective_univariate_path(), "/forecast_arima");
    assert_eq!(config.service.effective_multivariate_path(), "/forecast_rf");
    assert_eq!(config.service.effective_save_path(), "/save_forecast");
    assert_eq!(config.service.effective_list_path(), "/get_saved_forecasts");
    assert_eq!(config.service.effective_timeout().as_secs(), 30);
    assert_eq!(config.export.effective_table_decimals(), 2);
    assert_eq!(config.export.effective_page_size(), PageSize::A4);
    assert!(config.export.effective_embed_chart());
    assert_eq!(config.chart.effective_width_px(), 1200);
    assert_eq!(config.forecast.effective_default_region(), Region::India);
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_salescast_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("salescast.toml"),
        r#"
[service]
base_url = "http://project:5000"
timeout_secs = 10

[export]
table_decimals = 3
page_size = "letter"
"#,
    )
    .unwrap();

    std::env::set_var("SALESCAST_TIMEOUT_SECS", "45");

    let cli = CliOverrides {
        service_url: Some("http://cli:9000".into()),
        ..Default::default()
    };
    let config = SalescastConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats project file.
    assert_eq!(config.service.effective_base_url(), "http://cli:9000");
    // Env beats project file.
    assert_eq!(config.service.effective_timeout().as_secs(), 45);
    // Project file beats defaults.
    assert_eq!(config.export.effective_table_decimals(), 3);
    assert_eq!(config.export.effective_page_size(), PageSize::Letter);

    clear_salescast_env_vars();
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_salescast_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("salescast.toml"), "[service\nbase_url = ").unwrap();

    let err = SalescastConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let zero_timeout = SalescastConfig::from_toml("[service]\ntimeout_secs = 0\n").unwrap();
    assert!(matches!(
        SalescastConfig::validate(&zero_timeout),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "service.timeout_secs"
    ));

    let bad_region = SalescastConfig::from_toml("[forecast]\ndefault_region = \"JP\"\n").unwrap();
    assert!(SalescastConfig::validate(&bad_region).is_err());

    let too_precise = SalescastConfig::from_toml("[export]\ntable_decimals = 11\n").unwrap();
    assert!(SalescastConfig::validate(&too_precise).is_err());

    let flat_chart = SalescastConfig::from_toml("[chart]\nheight_px = 0\n").unwrap();
    assert!(SalescastConfig::validate(&flat_chart).is_err());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = SalescastConfig::from_toml(
        r#"
[service]
base_url = "http://x"
future_option = true
"#,
    )
    .unwrap();
    assert_eq!(config.service.effective_base_url(), "http://x");
}

#[test]
fn test_toml_round_trip() {
    let mut config = SalescastConfig::default();
    config.forecast.default_region = Some("FR".into());
    config.chart.width_px = Some(800);

    let text = config.to_toml().unwrap();
    let back = SalescastConfig::from_toml(&text).unwrap();
    assert_eq!(back.forecast.effective_default_region(), Region::France);
    assert_eq!(back.chart.effective_width_px(), 800);
}
