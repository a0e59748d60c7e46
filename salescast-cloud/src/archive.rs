//! HttpArchive: the remote forecast store.

use salescast_core::config::ServiceConfig;
use salescast_core::errors::{ArchiveError, Collected, TransportError};
use salescast_core::traits::IForecastArchive;
use salescast_core::{ForecastResult, SaveAck};
use salescast_normalize::ResultNormalizer;
use serde_json::Value;
use tracing::{info, warn, Instrument};

use crate::transport::protocol::new_request_id;
use crate::transport::{HttpClient, HttpClientConfig, HttpResponse};

/// Saves results as JSON records and lists them back through the normalizer.
#[derive(Debug, Clone)]
pub struct HttpArchive {
    http: HttpClient,
    save_path: String,
    list_path: String,
    normalizer: ResultNormalizer,
}

impl HttpArchive {
    pub fn new(config: &ServiceConfig) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(HttpClientConfig::from_service(config))?,
            save_path: config.effective_save_path().to_string(),
            list_path: config.effective_list_path().to_string(),
            normalizer: ResultNormalizer::new(),
        })
    }
}

fn unavailable(e: TransportError) -> ArchiveError {
    ArchiveError::Unavailable {
        reason: e.to_string(),
    }
}

fn rejected(resp: &HttpResponse) -> ArchiveError {
    ArchiveError::ServerError {
        status: resp.status,
        message: resp.error_message(),
    }
}

/// Normalize each listed record, keeping store order. Records that fail are
/// reported in `errors` and skipped.
pub(crate) fn collect_records(
    normalizer: &ResultNormalizer,
    records: &[Value],
) -> Collected<Vec<ForecastResult>> {
    let mut collected = Collected::new(Vec::with_capacity(records.len()));
    for (index, raw) in records.iter().enumerate() {
        match normalizer.normalize_record(raw) {
            Ok(result) => collected.data.push(result),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable archive record");
                collected.add_error(e);
            }
        }
    }
    collected
}

impl HttpArchive {
    async fn save_record(
        &self,
        result: &ForecastResult,
        request_id: &str,
    ) -> Result<SaveAck, ArchiveError> {
        let record = result.to_record();
        let resp = self
            .http
            .post_json(&self.save_path, &record, request_id)
            .await
            .map_err(unavailable)?;
        if !resp.is_success() {
            return Err(rejected(&resp));
        }

        // Older stores answer with an empty or plain-text body.
        let ack = resp.json::<SaveAck>().unwrap_or_default();
        info!(id = ?ack.id, "forecast saved");
        Ok(ack)
    }

    async fn list_records(
        &self,
        request_id: &str,
    ) -> Result<Collected<Vec<ForecastResult>>, ArchiveError> {
        let resp = self
            .http
            .get(&self.list_path, request_id)
            .await
            .map_err(unavailable)?;
        if !resp.is_success() {
            return Err(rejected(&resp));
        }

        let body: Value = resp.json().map_err(|e| ArchiveError::InvalidResponse {
            reason: e.to_string(),
        })?;
        let records = body
            .as_array()
            .ok_or_else(|| ArchiveError::InvalidResponse {
                reason: "expected a JSON array of records".to_string(),
            })?;

        let collected = collect_records(&self.normalizer, records);
        info!(
            loaded = collected.data.len(),
            skipped = collected.error_count(),
            "saved forecasts listed"
        );
        Ok(collected)
    }
}

impl IForecastArchive for HttpArchive {
    async fn save(&self, result: &ForecastResult) -> Result<SaveAck, ArchiveError> {
        let request_id = new_request_id();
        self.save_record(result, &request_id)
            .instrument(salescast_core::archive_span!("save"))
            .await
    }

    async fn list(&self) -> Result<Collected<Vec<ForecastResult>>, ArchiveError> {
        let request_id = new_request_id();
        self.list_records(&request_id)
            .instrument(salescast_core::archive_span!("list"))
            .await
    }
}
