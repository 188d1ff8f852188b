//! Uniform HTTP access with auth, serialisation, and error normalisation.
//!
//! The gateway owns request policy only: URL construction, the truthy-only
//! query contract, which token accompanies a request, and the mapping of
//! every failure into [`ApiError`]. The wire itself belongs to the
//! [`ApiTransport`] port.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::domain::error::{ApiError, ApiResult, body_preview};
use crate::domain::ports::{ApiRequest, ApiResponse, ApiTransport, HttpMethod, TransportError};
use crate::domain::query::{Filters, ResourcePath};
use crate::domain::session::SessionHandle;

/// Configuration errors raised when constructing [`ApiGateway`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayConfigError {
    /// The base URL cannot have paths joined onto it.
    #[error("base URL cannot be used as a request base: {url}")]
    UnusableBaseUrl {
        /// The offending URL text.
        url: String,
    },
}

/// Request layer shared by every service in the client.
#[derive(Clone)]
pub struct ApiGateway {
    transport: Arc<dyn ApiTransport>,
    base_url: Url,
    auth: SessionHandle,
}

impl ApiGateway {
    /// Build a gateway over a transport, rooted at `base_url`.
    ///
    /// The base URL is normalised to end in a slash so resource paths join
    /// underneath it instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayConfigError::UnusableBaseUrl`] when `base_url`
    /// cannot serve as a join base.
    pub fn new(
        transport: Arc<dyn ApiTransport>,
        base_url: Url,
        auth: SessionHandle,
    ) -> Result<Self, GatewayConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(GatewayConfigError::UnusableBaseUrl {
                url: base_url.to_string(),
            });
        }
        let mut normalised = base_url;
        if !normalised.path().ends_with('/') {
            let path = format!("{}/", normalised.path());
            normalised.set_path(&path);
        }
        Ok(Self {
            transport,
            base_url: normalised,
            auth,
        })
    }

    /// The session view this gateway reads tokens from.
    pub fn session(&self) -> &SessionHandle {
        &self.auth
    }

    /// Fetch and decode a resource, serialising `filters` per the truthy
    /// contract.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        filters: &Filters,
    ) -> ApiResult<T> {
        let url = self.endpoint(path, filters)?;
        let response = self.dispatch(HttpMethod::Get, url, None).await?;
        decode(&response)
    }

    /// Create a resource or invoke an action, returning the decoded response.
    pub async fn post<B, T>(&self, path: &ResourcePath, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, &Filters::new())?;
        let payload = encode(body)?;
        let response = self.dispatch(HttpMethod::Post, url, Some(payload)).await?;
        decode(&response)
    }

    /// Replace a resource, returning the decoded response.
    pub async fn put<B, T>(&self, path: &ResourcePath, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, &Filters::new())?;
        let payload = encode(body)?;
        let response = self.dispatch(HttpMethod::Put, url, Some(payload)).await?;
        decode(&response)
    }

    /// Remove a resource.
    pub async fn delete(&self, path: &ResourcePath) -> ApiResult<()> {
        let url = self.endpoint(path, &Filters::new())?;
        self.dispatch(HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    fn endpoint(&self, path: &ResourcePath, filters: &Filters) -> ApiResult<Url> {
        let mut url = self
            .base_url
            .join(&format!("{path}/"))
            .map_err(|err| ApiError::malformed(format!("unusable resource path {path}: {err}")))?;
        if !filters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in filters.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> ApiResult<ApiResponse> {
        let auth_token = self.auth.current_token();
        debug!(%method, %url, authenticated = auth_token.is_some(), "dispatching request");
        let response = self
            .transport
            .execute(ApiRequest {
                method,
                url,
                auth_token,
                body,
            })
            .await
            .map_err(map_transport_error)?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }
}

fn map_transport_error(error: TransportError) -> ApiError {
    match error {
        TransportError::Timeout { message } | TransportError::Network { message } => {
            ApiError::network(message)
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::malformed(format!("unserialisable request body: {err}")))
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> ApiResult<T> {
    serde_json::from_slice(&response.body).map_err(|err| {
        ApiError::malformed(format!(
            "undecodable response body ({err}): {}",
            body_preview(&response.body)
        ))
    })
}

#[cfg(test)]
mod tests {
    //! Coverage for URL building, auth attachment, and error mapping.

    use std::sync::Mutex;

    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::ports::MockApiTransport;
    use crate::domain::session::AuthState;

    fn canned(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    fn recording_transport(
        status: u16,
        body: &'static str,
    ) -> (Arc<MockApiTransport>, Arc<Mutex<Vec<ApiRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut transport = MockApiTransport::new();
        transport.expect_execute().returning(move |request| {
            sink.lock().expect("request log poisoned").push(request);
            Ok(canned(status, body))
        });
        (Arc::new(transport), seen)
    }

    fn gateway(transport: Arc<MockApiTransport>, auth: SessionHandle) -> ApiGateway {
        let base = Url::parse("http://127.0.0.1:8000/api").expect("valid base");
        ApiGateway::new(transport, base, auth).expect("gateway should build")
    }

    #[tokio::test]
    async fn get_serialises_filters_and_normalises_base() {
        let (transport, seen) = recording_transport(200, "{\"ok\":true}");
        let gw = gateway(transport, SessionHandle::new());

        let filters = Filters::new()
            .with_text("conference", "Eastern")
            .with_text("page", "2");
        let _: serde_json::Value = gw
            .get(&ResourcePath::new("teams"), &filters)
            .await
            .expect("request should succeed");

        let requests = seen.lock().expect("request log poisoned");
        let request = requests.first().expect("one request dispatched");
        assert_eq!(
            request.url.as_str(),
            "http://127.0.0.1:8000/api/teams/?conference=Eastern&page=2"
        );
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.auth_token, None);
    }

    #[tokio::test]
    async fn authenticated_session_attaches_token() {
        let (transport, seen) = recording_transport(200, "[]");
        let auth = SessionHandle::new();
        auth.replace(AuthState::PendingVerification {
            token: "tok-9".to_owned(),
        });
        let gw = gateway(transport, auth);

        let _: serde_json::Value = gw
            .get(&ResourcePath::new("teams"), &Filters::new())
            .await
            .expect("request should succeed");

        let requests = seen.lock().expect("request log poisoned");
        let request = requests.first().expect("one request dispatched");
        assert_eq!(request.auth_token.as_deref(), Some("tok-9"));
    }

    #[tokio::test]
    async fn post_carries_json_body() {
        let (transport, seen) = recording_transport(201, "{\"id\":5}");
        let gw = gateway(transport, SessionHandle::new());

        let _: serde_json::Value = gw
            .post(&ResourcePath::new("teams"), &json!({"name": "Hawks"}))
            .await
            .expect("request should succeed");

        let requests = seen.lock().expect("request log poisoned");
        let request = requests.first().expect("one request dispatched");
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"name": "Hawks"})));
    }

    #[rstest]
    #[case(401, "Unauthorized")]
    #[case(404, "NotFound")]
    #[case(503, "ServerError")]
    #[case(400, "Malformed")]
    #[tokio::test]
    async fn non_success_statuses_map_to_taxonomy(#[case] status: u16, #[case] expected: &str) {
        let (transport, _) = recording_transport(status, "{\"detail\":\"denied\"}");
        let gw = gateway(transport, SessionHandle::new());

        let error = gw
            .get::<serde_json::Value>(&ResourcePath::new("teams"), &Filters::new())
            .await
            .expect_err("non-2xx must fail");
        let kind = match error {
            ApiError::Unauthorized { .. } => "Unauthorized",
            ApiError::NotFound { .. } => "NotFound",
            ApiError::ServerError { .. } => "ServerError",
            ApiError::Malformed { .. } => "Malformed",
            ApiError::NetworkFailure { .. } => "NetworkFailure",
        };
        assert_eq!(kind, expected);
    }

    #[tokio::test]
    async fn transport_failures_map_to_network_kind() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_execute()
            .returning(|_| Err(TransportError::timeout("deadline exceeded")));
        let gw = gateway(Arc::new(transport), SessionHandle::new());

        let error = gw
            .get::<serde_json::Value>(&ResourcePath::new("teams"), &Filters::new())
            .await
            .expect_err("transport failure must surface");
        assert!(matches!(error, ApiError::NetworkFailure { .. }));
    }

    #[tokio::test]
    async fn undecodable_success_body_is_malformed() {
        let (transport, _) = recording_transport(200, "not json");
        let gw = gateway(transport, SessionHandle::new());

        let error = gw
            .get::<serde_json::Value>(&ResourcePath::new("teams"), &Filters::new())
            .await
            .expect_err("bad body must fail");
        assert!(matches!(error, ApiError::Malformed { status: None, .. }));
    }
}
