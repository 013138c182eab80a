// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP implementation of the transport boundary.

use crate::error::TransportError;
use crate::request::{StatusChangeRequest, SyncRequest};
use crate::{CadTransport, DEFAULT_TIMEOUT_SECS};
use async_trait::async_trait;
use cad_domain::{BookOffRequest, BookOnRequest, Officer, SyncPayload};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Base URL of the CAD backend (e.g., `https://cad.example.net/api`).
    pub base_url: String,
    /// API key sent on every request, when the backend requires one.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl HttpTransportConfig {
    /// Creates a config with the default timeout and no API key.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `CadTransport` implementation over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Creates a new `HttpTransport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(Self { client, config })
    }

    /// Joins a path onto the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Applies the API key header when configured.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }

    /// Sends a POST with a JSON body and decodes a JSON response.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, TransportError>
    where
        B: serde::Serialize + Sync,
        R: DeserializeOwned,
    {
        let url: String = self.endpoint(path);
        debug!(url = %url, "POST");
        let response: reqwest::Response = self
            .authorize(self.client.post(&url).json(body))
            .send()
            .await?;
        let response: reqwest::Response = Self::ensure_success(response).await?;
        response
            .json::<R>()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))
    }

    /// Sends a POST with a JSON body, ignoring any response body.
    async fn post_json_unit<B>(&self, path: &str, body: &B) -> Result<(), TransportError>
    where
        B: serde::Serialize + Sync,
    {
        let url: String = self.endpoint(path);
        debug!(url = %url, "POST");
        let response: reqwest::Response = self
            .authorize(self.client.post(&url).json(body))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Sends a GET and decodes a JSON response.
    async fn get_json<R>(&self, path: &str) -> Result<R, TransportError>
    where
        R: DeserializeOwned,
    {
        let url: String = self.endpoint(path);
        debug!(url = %url, "GET");
        let response: reqwest::Response = self.authorize(self.client.get(&url)).send().await?;
        let response: reqwest::Response = Self::ensure_success(response).await?;
        response
            .json::<R>()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))
    }

    /// Turns a non-success response into `TransportError::Backend`,
    /// preserving the response body as the message.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, TransportError> {
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message: String = response.text().await.unwrap_or_default();
        Err(TransportError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CadTransport for HttpTransport {
    async fn fetch_snapshot(&self, request: &SyncRequest) -> Result<SyncPayload, TransportError> {
        self.post_json("cad/sync/summaries", request).await
    }

    async fn submit_status_change(
        &self,
        request: &StatusChangeRequest,
    ) -> Result<(), TransportError> {
        self.post_json_unit("cad/callsign/status", request).await
    }

    async fn book_on(&self, request: &BookOnRequest) -> Result<(), TransportError> {
        self.post_json_unit("cad/shift/book-on", request).await
    }

    async fn book_off(&self, request: &BookOffRequest) -> Result<(), TransportError> {
        self.post_json_unit("cad/shift/book-off", request).await
    }

    async fn fetch_employee_details(&self, payroll_id: &str) -> Result<Officer, TransportError> {
        self.get_json(&format!("cad/employee/{payroll_id}")).await
    }
}
