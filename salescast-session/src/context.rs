//! SelectionContext: what the user has picked so far.

use chrono::{DateTime, Utc};
use salescast_core::errors::SessionError;
use salescast_core::{DatasetUpload, ForecastRequest, ForecastVariant, Region};

/// Per-session input state: dataset, region, and request bookkeeping.
#[derive(Debug, Clone)]
pub struct SelectionContext {
    /// Unique session identifier.
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    upload: Option<DatasetUpload>,
    region: Option<Region>,
    /// Completed forecast requests, successful or not.
    pub requests_made: u64,
}

impl SelectionContext {
    pub fn new(session_id: String, default_region: Option<Region>) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            created_at: now,
            last_activity: now,
            upload: None,
            region: default_region,
            requests_made: 0,
        }
    }

    pub fn select_file(&mut self, upload: DatasetUpload) {
        self.upload = Some(upload);
        self.touch();
    }

    pub fn select_region(&mut self, region: Option<Region>) {
        self.region = region;
        self.touch();
    }

    pub fn upload(&self) -> Option<&DatasetUpload> {
        self.upload.as_ref()
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Build the request for `variant`, checking the selection first.
    pub fn request_for(&self, variant: ForecastVariant) -> Result<ForecastRequest, SessionError> {
        let upload = self
            .upload
            .as_ref()
            .filter(|u| !u.is_empty())
            .ok_or(SessionError::NoFile)?;
        let region = if variant.requires_region() {
            Some(self.region.ok_or(SessionError::RegionRequired)?)
        } else {
            None
        };
        Ok(ForecastRequest {
            variant,
            upload: upload.clone(),
            region,
        })
    }

    pub(crate) fn record_request(&mut self) {
        self.requests_made += 1;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}
