//! Region codes accepted by the multivariate model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PayloadError;

/// Supported region codes. The multivariate model derives holiday features
/// from the selected region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "CA")]
    Canada,
    #[serde(rename = "UK")]
    UnitedKingdom,
    #[serde(rename = "FR")]
    France,
    #[serde(rename = "DE")]
    Germany,
    #[serde(rename = "AU")]
    Australia,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Self::India,
        Self::UnitedStates,
        Self::Canada,
        Self::UnitedKingdom,
        Self::France,
        Self::Germany,
        Self::Australia,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::India => "IN",
            Self::UnitedStates => "US",
            Self::Canada => "CA",
            Self::UnitedKingdom => "UK",
            Self::France => "FR",
            Self::Germany => "DE",
            Self::Australia => "AU",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::UnitedStates => "United States",
            Self::Canada => "Canada",
            Self::UnitedKingdom => "United Kingdom",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Australia => "Australia",
        }
    }

    /// Case-insensitive lookup by code.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| PayloadError::UnsupportedRegion {
            code: s.to_string(),
        })
    }
}
