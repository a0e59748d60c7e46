//! ChartSnapshot: a raster capture of a rendered chart.

/// PNG-encoded capture of the chart surface, used only for embedding in
/// exported artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSnapshot {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl ChartSnapshot {
    pub fn new(png: Vec<u8>, width: u32, height: u32) -> Self {
        Self { png, width, height }
    }

    /// Encoded PNG bytes.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }
}
