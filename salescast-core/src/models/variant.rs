//! ForecastVariant: which remote model produced a result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MODEL_NAME_MULTIVARIATE, MODEL_NAME_UNIVARIATE};
use crate::errors::PayloadError;

/// The two supported forecast models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastVariant {
    /// Single series, reports confidence intervals.
    Univariate,
    /// Multi-feature, reports an error metric and needs a region.
    Multivariate,
}

impl ForecastVariant {
    /// Name used on the wire and in archived records.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Univariate => MODEL_NAME_UNIVARIATE,
            Self::Multivariate => MODEL_NAME_MULTIVARIATE,
        }
    }

    /// Human-readable title used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Univariate => "Univariate Forecast",
            Self::Multivariate => "Multivariate Forecast",
        }
    }

    /// File stem for exported artifacts.
    pub fn artifact_stem(&self) -> &'static str {
        match self {
            Self::Univariate => "univariate_forecast",
            Self::Multivariate => "multivariate_forecast",
        }
    }

    /// Whether results of this variant are required to carry a region.
    pub fn requires_region(&self) -> bool {
        matches!(self, Self::Multivariate)
    }

    /// Parse a model name as reported by the service or stored in the archive.
    /// Accepts the current names plus the model-family aliases older
    /// service versions used.
    pub fn from_model_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "UNIVARIATE" | "ARIMA" | "SARIMAX" => Some(Self::Univariate),
            "MULTIVARIATE" | "RANDOM_FOREST" | "RANDOMFOREST" | "RF" => Some(Self::Multivariate),
            _ => None,
        }
    }
}

impl fmt::Display for ForecastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for ForecastVariant {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_model_name(s).ok_or_else(|| PayloadError::UnknownVariant {
            value: s.to_string(),
        })
    }
}
