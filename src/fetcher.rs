//! Generic fetch-and-decode service.
//!
//! One shared `reqwest` client performs every call described by an
//! [`ApiRequest`] and decodes the JSON body into the caller's wire type.
//! Request and response metadata (method, URL, status, duration) is
//! logged as an observability side channel only.

use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::FetchError;
use crate::request::ApiRequest;

/// Issues HTTP calls per descriptor and decodes typed JSON results.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    /// Builds the shared HTTP client with the configured user agent and
    /// per-request timeout.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Performs one round trip: send, check status, decode body as `T`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` for transport failures,
    /// `FetchError::Status` for non-success status codes and
    /// `FetchError::Decode` when the body does not match `T`. Callers
    /// treat all three uniformly.
    pub async fn perform<T, R>(&self, request: &R) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        R: ApiRequest,
    {
        let url = format!("{}{}", self.base_url, request.path());
        let method = request.method();
        tracing::debug!(%method, %url, query = ?request.query(), "issuing request");

        let mut builder = self.client.request(method, &url);
        if let Some(query) = request.query() {
            builder = builder.query(&query);
        }
        if let Some(headers) = request.headers() {
            builder = builder.headers(headers);
        }

        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(%status, elapsed_ms, %url, "response received");

        if !status.is_success() {
            tracing::warn!(%status, %url, "request failed");
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;
        tracing::debug!(bytes = body.len(), %url, "response decoded");
        Ok(decoded)
    }
}
