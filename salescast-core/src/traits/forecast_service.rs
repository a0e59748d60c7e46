//! IForecastService: the remote forecasting boundary.

use crate::errors::SalescastResult;
use crate::models::ForecastRequest;

/// Submits a dataset and returns the raw response body. The body is
/// untrusted until it passes the normalizer.
#[allow(async_fn_in_trait)]
pub trait IForecastService {
    async fn forecast(&self, request: &ForecastRequest) -> SalescastResult<serde_json::Value>;
}
