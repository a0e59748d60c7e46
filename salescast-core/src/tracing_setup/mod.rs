//! Tracing initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize the Salescast tracing/logging system.
///
/// Reads `SALESCAST_LOG` for per-crate log levels, e.g.
/// `SALESCAST_LOG=salescast_cloud=debug,salescast_export=info`.
/// Falls back to `salescast=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(env_filter())
            .init();
    });
}

/// Same as [`init_tracing`] but emits structured JSON lines.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter())
            .init();
    });
}
