//! Remote forecast service and archive endpoints.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL shared by the forecast and archive endpoints.
    pub base_url: Option<String>,
    pub univariate_path: Option<String>,
    pub multivariate_path: Option<String>,
    pub save_path: Option<String>,
    pub list_path: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl ServiceConfig {
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_SERVICE_URL)
    }

    pub fn effective_univariate_path(&self) -> &str {
        self.univariate_path
            .as_deref()
            .unwrap_or(defaults::DEFAULT_UNIVARIATE_PATH)
    }

    pub fn effective_multivariate_path(&self) -> &str {
        self.multivariate_path
            .as_deref()
            .unwrap_or(defaults::DEFAULT_MULTIVARIATE_PATH)
    }

    pub fn effective_save_path(&self) -> &str {
        self.save_path.as_deref().unwrap_or(defaults::DEFAULT_SAVE_PATH)
    }

    pub fn effective_list_path(&self) -> &str {
        self.list_path.as_deref().unwrap_or(defaults::DEFAULT_LIST_PATH)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS))
    }
}
