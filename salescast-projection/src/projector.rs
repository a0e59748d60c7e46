//! SeriesProjector: ForecastResult to display rows.

use salescast_core::ForecastResult;

use crate::format::format_date;
use crate::row::Row;

/// Projects a result into rows, one per forecast step, in time-index order.
///
/// Pure and infallible: the result's invariants already guarantee aligned
/// lengths, so every call yields a fresh, identical vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesProjector;

impl SeriesProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, result: &ForecastResult) -> Vec<Row> {
        let intervals = result.confidence_intervals();
        result
            .time_index()
            .iter()
            .zip(result.point_forecast())
            .enumerate()
            .map(|(i, (label, &forecast))| {
                let ci = intervals.and_then(|cis| cis.get(i));
                Row {
                    date: format_date(label),
                    forecast,
                    lower_ci: ci.and_then(|c| c.lower),
                    upper_ci: ci.and_then(|c| c.upper),
                }
            })
            .collect()
    }
}
