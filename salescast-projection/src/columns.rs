//! ColumnSet: the one presence check deciding which columns exist.

use salescast_core::ForecastResult;

pub const DATE_HEADER: &str = "Date";
pub const FORECAST_HEADER: &str = "Forecast";
pub const LOWER_CI_HEADER: &str = "Lower CI";
pub const UPPER_CI_HEADER: &str = "Upper CI";

/// Columns shown for a result in the table view, the PDF, and the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSet {
    /// `Date, Forecast`
    PointOnly,
    /// `Date, Forecast, Lower CI, Upper CI`
    WithIntervals,
}

impl ColumnSet {
    /// CI columns exist only when the result carries intervals. Results
    /// without them never get placeholder columns.
    pub fn for_result(result: &ForecastResult) -> Self {
        if result.has_confidence_intervals() {
            Self::WithIntervals
        } else {
            Self::PointOnly
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::PointOnly => &[DATE_HEADER, FORECAST_HEADER],
            Self::WithIntervals => &[
                DATE_HEADER,
                FORECAST_HEADER,
                LOWER_CI_HEADER,
                UPPER_CI_HEADER,
            ],
        }
    }

    pub fn has_intervals(&self) -> bool {
        matches!(self, Self::WithIntervals)
    }

    pub fn len(&self) -> usize {
        self.headers().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
