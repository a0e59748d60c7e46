//! ChartSurface: the mounted (or not) chart for one result.

use salescast_core::config::ChartConfig;
use salescast_core::ForecastResult;
use salescast_projection::{Row, SeriesProjector};

#[derive(Debug, Clone, PartialEq)]
struct Mounted {
    rows: Vec<Row>,
    width: u32,
    height: u32,
}

/// A chart that is either showing a result or empty.
///
/// Capturing an unmounted surface fails with `SnapshotError::NotMounted`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSurface {
    mounted: Option<Mounted>,
}

impl ChartSurface {
    /// An empty surface, as before any result has been shown.
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Mount `result` at the configured size.
    pub fn for_result(result: &ForecastResult, config: &ChartConfig) -> Self {
        let mut surface = Self::unmounted();
        surface.mount(result, config);
        surface
    }

    /// Replace whatever is shown with `result`.
    pub fn mount(&mut self, result: &ForecastResult, config: &ChartConfig) {
        self.mounted = Some(Mounted {
            rows: SeriesProjector::new().project(result),
            width: config.effective_width_px(),
            height: config.effective_height_px(),
        });
    }

    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn rows(&self) -> Option<&[Row]> {
        self.mounted.as_ref().map(|m| m.rows.as_slice())
    }

    /// Pixel size, when mounted.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.mounted.as_ref().map(|m| (m.width, m.height))
    }
}
