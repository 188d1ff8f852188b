//! Reqwest-backed transport adapter.
//!
//! This adapter owns wire details only: turning an [`ApiRequest`] into
//! headers and a body, the request timeout, and the split between timeout
//! and connection failures. Status interpretation belongs to the gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::{ApiRequest, ApiResponse, ApiTransport, HttpMethod, TransportError};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Transport adapter performing HTTP exchanges with one reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS))
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let ApiRequest {
            method,
            url,
            auth_token,
            body,
        } = request;

        let mut builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };
        if let Some(token) = auth_token {
            builder = builder.header(reqwest::header::AUTHORIZATION, format!("Token {token}"));
        }
        if let Some(payload) = body {
            builder = builder.json(&payload);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(ApiResponse {
            status,
            body: bytes.to_vec(),
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else {
        TransportError::network(error.to_string())
    }
}
