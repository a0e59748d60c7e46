//! Async HTTP client with timeout and gzip compression.

use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use salescast_core::config::ServiceConfig;
use salescast_core::errors::TransportError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::protocol::{ErrorBody, REQUEST_ID_HEADER};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL the request paths are appended to.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_service(&ServiceConfig::default())
    }
}

impl HttpClientConfig {
    pub fn from_service(service: &ServiceConfig) -> Self {
        Self {
            base_url: service.effective_base_url().trim_end_matches('/').to_string(),
            timeout: service.effective_timeout(),
        }
    }
}

/// A fully read response. Non-2xx statuses are not errors at this level;
/// callers decide what a rejection means for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub request_id: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Decode {
            reason: e.to_string(),
        })
    }

    /// Server-provided error message, or the raw body when it has none.
    pub fn error_message(&self) -> String {
        ErrorBody::parse(&self.body).unwrap_or_else(|| self.body.trim().to_string())
    }

    /// Whether the body is a JSON `{"error": ...}` message.
    pub fn has_error_body(&self) -> bool {
        ErrorBody::parse(&self.body).is_some()
    }
}

/// Map a reqwest failure onto the transport taxonomy.
fn net_err(e: reqwest::Error, timeout: Duration) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout {
            after_secs: timeout.as_secs(),
        }
    } else if e.is_builder() {
        TransportError::Request {
            reason: e.to_string(),
        }
    } else if e.is_decode() || e.is_body() {
        TransportError::Decode {
            reason: e.to_string(),
        }
    } else {
        TransportError::Connect {
            reason: e.to_string(),
        }
    }
}

/// HTTP transport client shared by the service client and the archive.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: HttpClientConfig,
    client: Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| TransportError::Request {
                reason: e.to_string(),
            })?;
        Ok(Self { config, client })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// POST a multipart form.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: Form,
        request_id: &str,
    ) -> Result<HttpResponse, TransportError> {
        let req = self.client.post(self.url(path)).multipart(form);
        self.send(req, request_id).await
    }

    /// POST a JSON body.
    pub async fn post_json<Req: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &Req,
        request_id: &str,
    ) -> Result<HttpResponse, TransportError> {
        let req = self.client.post(self.url(path)).json(payload);
        self.send(req, request_id).await
    }

    /// GET a resource.
    pub async fn get(&self, path: &str, request_id: &str) -> Result<HttpResponse, TransportError> {
        let req = self.client.get(self.url(path));
        self.send(req, request_id).await
    }

    /// Single attempt: send, then read the whole body. No retry.
    async fn send(
        &self,
        req: RequestBuilder,
        request_id: &str,
    ) -> Result<HttpResponse, TransportError> {
        let timeout = self.config.timeout;

        let resp = req
            .header(REQUEST_ID_HEADER, request_id)
            .send()
            .await
            .map_err(|e| net_err(e, timeout))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| net_err(e, timeout))?;

        tracing::debug!(status, bytes = body.len(), "http response");
        Ok(HttpResponse {
            status,
            body,
            request_id: request_id.to_string(),
        })
    }
}
