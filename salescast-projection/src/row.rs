//! One display row per forecast step.

/// A projected forecast step. Values keep full precision; rounding happens
/// when a [`Table`](crate::Table) or an exporter renders them.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub date: String,
    pub forecast: f64,
    pub lower_ci: Option<f64>,
    pub upper_ci: Option<f64>,
}

impl Row {
    /// Whether either bound was reported.
    pub fn has_bounds(&self) -> bool {
        self.lower_ci.is_some() || self.upper_ci.is_some()
    }
}
