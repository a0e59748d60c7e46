//! Cell formatting shared by the table view and the exporters.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use salescast_core::constants::MISSING_VALUE;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a time-index label as `YYYY-MM-DD` when it parses as a date or
/// datetime. Anything else is passed through unchanged.
pub fn format_date(label: &str) -> String {
    let text = label.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return date.format(DATE_FORMAT).to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return ts.date_naive().format(DATE_FORMAT).to_string();
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return naive.date().format(DATE_FORMAT).to_string();
        }
    }
    label.to_string()
}

/// Fixed-precision value for display.
pub fn format_value(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Fixed-precision bound for display; `N/A` when the service reported none.
pub fn format_bound(bound: Option<f64>, decimals: usize) -> String {
    match bound {
        Some(v) => format_value(v, decimals),
        None => MISSING_VALUE.to_string(),
    }
}
