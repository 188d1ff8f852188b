//! Domain ports defining the edges of the client.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the HTTP transport, the persisted-token store). Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants instead of leaking implementation error types.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use thiserror::Error;

/// HTTP verbs the gateway dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a resource or collection.
    Get,
    /// Create a resource or invoke an action.
    Post,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Canonical verb spelling for logging and adapters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully built request handed to the transport.
///
/// Policy lives above this type: the gateway decides which token (if any)
/// accompanies the request and what the body is; the transport only turns
/// the value into wire headers (`Authorization: Token <value>`,
/// `Content-Type: application/json`).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Verb to dispatch.
    pub method: HttpMethod,
    /// Absolute target URL including any query string.
    pub url: Url,
    /// Session token to present, when one is held.
    pub auth_token: Option<String>,
    /// JSON body for write verbs.
    pub body: Option<Value>,
}

/// Raw response the transport hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Unparsed response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures raised by the transport adapter when no response was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request exceeded the configured deadline.
    #[error("request timed out: {message}")]
    Timeout {
        /// Adapter-level description.
        message: String,
    },
    /// Connection-level failure (DNS, refused, reset).
    #[error("transport failed: {message}")]
    Network {
        /// Adapter-level description.
        message: String,
    },
}

impl TransportError {
    /// Helper for deadline failures.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Helper for connection failures.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }
}

/// Raw HTTP execution port.
///
/// A transport performs exactly one exchange: no retries, no caching, no
/// interpretation of non-2xx statuses (those are the gateway's concern).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Execute the request and return whatever response the wire produced.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Failures raised by the persisted-token store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenStoreError {
    /// Reading or writing the backing storage failed.
    #[error("token store failed: {message}")]
    Storage {
        /// Adapter-level description.
        message: String,
    },
}

impl TokenStoreError {
    /// Helper for backing-storage failures.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Persistence port for the single session token.
///
/// The store holds at most one opaque token string; its presence is the sole
/// signal used to restore a session at startup.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Fetch the persisted token, if any.
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist the token, replacing any previous value.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the persisted token; succeeds when none exists.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

#[cfg(test)]
mod tests {
    //! Coverage for request/response helpers.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(301, false)]
    #[case(404, false)]
    fn success_window_is_2xx(#[case] status: u16, #[case] expected: bool) {
        let response = ApiResponse {
            status,
            body: Vec::new(),
        };
        assert_eq!(response.is_success(), expected);
    }

    #[rstest]
    fn verbs_render_canonically() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
