use crate::decode::decoder::upstream_errors;
use crate::request::error::FetchError;
use crate::request::request_builder::{redact_url, SolarResourceRequest};
use log::{info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

/// Status, content type and body of one API call, before any checks.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// Request URL with the API key redacted.
    pub url: String,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchedResponse {
    /// True for `application/json`, with or without parameters such as `charset`.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false)
    }

    /// Passes the response through if it is a `200` carrying JSON.
    ///
    /// # Errors
    ///
    /// * [`FetchError::HttpStatus`] for any other status, with the API's own
    ///   error messages when the body has them.
    /// * [`FetchError::UnexpectedContentType`] for a `200` that is not JSON.
    pub fn ensure_success(self) -> Result<Self, FetchError> {
        if self.status != StatusCode::OK {
            let errors = upstream_errors(&self.body);
            warn!("HTTP error {} for {}: {:?}", self.status, self.url, errors);
            return Err(FetchError::HttpStatus {
                url: self.url,
                status: self.status,
                errors,
            });
        }
        if !self.is_json() {
            warn!(
                "Unexpected content type {:?} for {}",
                self.content_type, self.url
            );
            return Err(FetchError::UnexpectedContentType {
                url: self.url,
                content_type: self.content_type,
            });
        }
        Ok(self)
    }
}

/// Issues the GET request. Holds a reusable HTTP client and the endpoint.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns whatever came back. Only a failure to
    /// talk to the server, or to read the body, is an error here.
    pub async fn fetch(&self, request: &SolarResourceRequest) -> Result<FetchedResponse, FetchError> {
        let url = request.url(&self.base_url)?;
        let redacted = redact_url(&url);
        info!("Requesting solar resource data from {}", redacted);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(redacted.clone(), e.without_url()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(redacted.clone(), e.without_url()))?;

        info!(
            "Received {} ({} bytes, {}) from {}",
            status,
            body.len(),
            content_type.as_deref().unwrap_or("no content type"),
            redacted
        );
        Ok(FetchedResponse {
            url: redacted,
            status,
            content_type,
            body,
        })
    }
}
