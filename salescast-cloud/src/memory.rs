//! InMemoryArchive: a process-local store with the HTTP archive's semantics.

use std::sync::Mutex;

use salescast_core::errors::{ArchiveError, Collected};
use salescast_core::traits::IForecastArchive;
use salescast_core::{ForecastResult, SaveAck};
use salescast_normalize::ResultNormalizer;
use serde_json::Value;

use crate::archive::collect_records;

/// Stores wire records, so listing goes through the same normalization as
/// the remote archive. Used offline and in tests.
#[derive(Debug, Default)]
pub struct InMemoryArchive {
    records: Mutex<Vec<Value>>,
    normalizer: ResultNormalizer,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw records, as if a server had returned them.
    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            records: Mutex::new(records),
            normalizer: ResultNormalizer::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> ArchiveError {
    ArchiveError::Unavailable {
        reason: "in-memory store lock poisoned".to_string(),
    }
}

impl IForecastArchive for InMemoryArchive {
    async fn save(&self, result: &ForecastResult) -> Result<SaveAck, ArchiveError> {
        let record =
            serde_json::to_value(result.to_record()).map_err(|e| ArchiveError::InvalidResponse {
                reason: e.to_string(),
            })?;
        let mut records = self.records.lock().map_err(poisoned)?;
        records.push(record);
        Ok(SaveAck {
            id: Some(records.len() as u64),
            message: Some("Forecast saved successfully".to_string()),
        })
    }

    async fn list(&self) -> Result<Collected<Vec<ForecastResult>>, ArchiveError> {
        let records = self.records.lock().map_err(poisoned)?.clone();
        Ok(collect_records(&self.normalizer, &records))
    }
}
