//! Display ordering for saved results.

use salescast_core::ForecastResult;

/// Newest first. Stable, so results saved at the same instant keep the
/// store's relative order. Listing never applies this itself.
pub fn sort_for_display(results: &mut [ForecastResult]) {
    results.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
}
