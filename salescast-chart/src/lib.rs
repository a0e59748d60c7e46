//! Forecast chart surface and its PNG snapshotter.
//!
//! The surface is what a viewer has on screen: the projected rows of one
//! result plus the pixel size. `PlottersSnapshotter` rasterizes it headlessly
//! so exports can embed the same picture.

pub mod render;
pub mod snapshotter;
pub mod surface;

pub use snapshotter::PlottersSnapshotter;
pub use surface::ChartSurface;
