//! ForecastServiceClient: dataset upload to the forecast endpoints.

use reqwest::multipart::{Form, Part};
use salescast_core::config::ServiceConfig;
use salescast_core::constants::{UPLOAD_CONTENT_TYPE, UPLOAD_FILE_FIELD, UPLOAD_REGION_FIELD};
use salescast_core::errors::{SalescastResult, ServiceError, SessionError, TransportError};
use salescast_core::traits::IForecastService;
use salescast_core::{ForecastRequest, ForecastVariant};
use serde_json::Value;
use tracing::{info, Instrument};

use crate::transport::protocol::new_request_id;
use crate::transport::{HttpClient, HttpClientConfig};

/// Uploads datasets and returns the service's raw JSON answer.
#[derive(Debug, Clone)]
pub struct ForecastServiceClient {
    http: HttpClient,
    univariate_path: String,
    multivariate_path: String,
}

impl ForecastServiceClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(HttpClientConfig::from_service(config))?,
            univariate_path: config.effective_univariate_path().to_string(),
            multivariate_path: config.effective_multivariate_path().to_string(),
        })
    }

    pub fn path_for(&self, variant: ForecastVariant) -> &str {
        match variant {
            ForecastVariant::Univariate => &self.univariate_path,
            ForecastVariant::Multivariate => &self.multivariate_path,
        }
    }

    fn build_form(request: &ForecastRequest) -> SalescastResult<Form> {
        let file = Part::bytes(request.upload.bytes.clone())
            .file_name(request.upload.file_name.clone())
            .mime_str(UPLOAD_CONTENT_TYPE)
            .map_err(|e| TransportError::Request {
                reason: e.to_string(),
            })?;
        let mut form = Form::new().part(UPLOAD_FILE_FIELD, file);

        if request.variant.requires_region() {
            let region = request.region.ok_or(SessionError::RegionRequired)?;
            form = form.text(UPLOAD_REGION_FIELD, region.code());
        }
        Ok(form)
    }

    async fn submit(
        &self,
        request: &ForecastRequest,
        form: Form,
        request_id: &str,
    ) -> SalescastResult<Value> {
        let resp = self
            .http
            .post_multipart(self.path_for(request.variant), form, request_id)
            .await?;

        if !resp.is_success() {
            if resp.has_error_body() {
                return Err(ServiceError::Rejected {
                    status: resp.status,
                    message: resp.error_message(),
                }
                .into());
            }
            return Err(TransportError::Status {
                status: resp.status,
                body: resp.body,
            }
            .into());
        }

        let body: Value = resp.json()?;
        info!(
            file = %request.upload.file_name,
            bytes = resp.body.len(),
            "forecast received"
        );
        Ok(body)
    }
}

impl IForecastService for ForecastServiceClient {
    /// Multipart POST of the dataset. A missing region on a multivariate
    /// request fails before anything is sent.
    async fn forecast(&self, request: &ForecastRequest) -> SalescastResult<Value> {
        let form = Self::build_form(request)?;
        let request_id = new_request_id();
        let span = salescast_core::service_span!(request.variant, request_id);
        self.submit(request, form, &request_id)
            .instrument(span)
            .await
    }
}

