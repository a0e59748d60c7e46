//! Forecast request defaults.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Region;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForecastConfig {
    /// Region code preselected for multivariate forecasts.
    pub default_region: Option<String>,
}

impl ForecastConfig {
    /// The configured region, falling back to India. Unknown codes are
    /// rejected by `SalescastConfig::validate`, so the fallback only covers
    /// configs that skipped validation.
    pub fn effective_default_region(&self) -> Region {
        self.default_region
            .as_deref()
            .and_then(Region::from_code)
            .or_else(|| Region::from_code(defaults::DEFAULT_REGION))
            .unwrap_or_default()
    }
}
