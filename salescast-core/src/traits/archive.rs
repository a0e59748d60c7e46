//! IForecastArchive: durable storage of forecast results.

use crate::errors::{ArchiveError, Collected};
use crate::models::{ForecastResult, SaveAck};

/// Save/list access to previously saved results. No update or delete.
#[allow(async_fn_in_trait)]
pub trait IForecastArchive {
    /// Submit a result for storage. The caller keeps its copy regardless of outcome.
    async fn save(&self, result: &ForecastResult) -> Result<SaveAck, ArchiveError>;

    /// All saved results in the order the store returns them. Records that
    /// fail normalization are reported in `errors` instead of aborting the listing.
    async fn list(&self) -> Result<Collected<Vec<ForecastResult>>, ArchiveError>;
}
