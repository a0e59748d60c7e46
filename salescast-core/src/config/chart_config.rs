//! Chart surface dimensions.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartConfig {
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
}

impl ChartConfig {
    pub fn effective_width_px(&self) -> u32 {
        self.width_px.unwrap_or(defaults::DEFAULT_CHART_WIDTH_PX)
    }

    pub fn effective_height_px(&self) -> u32 {
        self.height_px.unwrap_or(defaults::DEFAULT_CHART_HEIGHT_PX)
    }
}
