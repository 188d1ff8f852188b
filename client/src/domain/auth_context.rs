//! Session lifecycle service.
//!
//! The auth context is the single writer of session state: login, logout,
//! persisted-token restore, and identity verification all go through it.
//! Everything else only reads the current token through the shared
//! [`SessionHandle`].

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::auth::{LoginCredentials, Registration};
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::gateway::ApiGateway;
use crate::domain::ports::TokenStore;
use crate::domain::query::{Filters, ResourcePath};
use crate::domain::session::{AuthState, Session, SessionHandle};
use crate::models::{Identity, RegisteredAccount, TokenGrant};

fn token_path() -> ResourcePath {
    ResourcePath::new("auth/token")
}

fn register_path() -> ResourcePath {
    ResourcePath::new("auth/register")
}

fn identity_path() -> ResourcePath {
    ResourcePath::new("auth/user")
}

/// Owner of the session state machine.
pub struct AuthContext {
    gateway: Arc<ApiGateway>,
    session: SessionHandle,
    store: Arc<dyn TokenStore>,
}

impl AuthContext {
    /// Build an auth context writing to the same session handle the gateway
    /// reads from.
    pub fn new(gateway: Arc<ApiGateway>, session: SessionHandle, store: Arc<dyn TokenStore>) -> Self {
        Self {
            gateway,
            session,
            store,
        }
    }

    /// The shared session view.
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Copy of the current token, when one is held.
    pub fn current_token(&self) -> Option<String> {
        self.session.current_token()
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> AuthState {
        self.session.snapshot()
    }

    /// Exchange credentials for a token and establish the session.
    ///
    /// Any non-2xx response is surfaced as [`ApiError::Unauthorized`]; state
    /// is left untouched on failure. A successful login replaces whatever
    /// session existed before.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<Session> {
        let grant: TokenGrant = self
            .gateway
            .post(
                &token_path(),
                &json!({
                    "username": credentials.username(),
                    "password": credentials.password(),
                }),
            )
            .await
            .map_err(unauthorized_on_rejection)?;

        let session = Session::new(grant.token, grant.user_id, grant.username, grant.email);
        self.persist_token(session.token());
        self.session.replace(AuthState::Authenticated {
            session: session.clone(),
        });
        debug!(username = session.username(), "session established");
        Ok(session)
    }

    /// Create an account. Errors carry the backend's response body so the
    /// caller can display what was rejected.
    pub async fn register(&self, registration: &Registration) -> ApiResult<RegisteredAccount> {
        self.gateway
            .post(
                &register_path(),
                &json!({
                    "username": registration.username(),
                    "email": registration.email(),
                    "password": registration.password(),
                }),
            )
            .await
    }

    /// Drop the session and the persisted token. Idempotent: logging out
    /// while logged out is a no-op.
    pub fn logout(&self) {
        if let Err(error) = self.store.clear() {
            warn!(%error, "persisted token could not be cleared");
        }
        self.session.replace(AuthState::Unauthenticated);
    }

    /// Restore a persisted token into `PendingVerification`, if one exists.
    ///
    /// Returns whether a token was found. Call [`Self::verify`] afterwards to
    /// confirm the identity behind it.
    pub fn restore(&self) -> bool {
        match self.store.load() {
            Ok(Some(token)) => {
                self.session.replace(AuthState::PendingVerification { token });
                true
            }
            Ok(None) => false,
            Err(error) => {
                warn!(%error, "persisted token could not be read");
                false
            }
        }
    }

    /// Confirm the identity behind the currently held token.
    ///
    /// On success the state becomes `Authenticated`. An `Unauthorized`
    /// response forces a logout (the sole automatic transition); any other
    /// failure leaves the optimistic session in place, since the token may
    /// still be valid.
    pub async fn verify(&self) -> ApiResult<Session> {
        let Some(token) = self.session.current_token() else {
            return Err(ApiError::unauthorized(401, "no session to verify"));
        };
        let identity: Identity = match self.gateway.get(&identity_path(), &Filters::new()).await {
            Ok(identity) => identity,
            Err(error) if error.is_unauthorized() => {
                warn!("persisted token rejected; forcing logout");
                self.logout();
                return Err(error);
            }
            Err(error) => return Err(error),
        };

        let session = Session::new(token, identity.id, identity.username, identity.email);
        self.session.replace(AuthState::Authenticated {
            session: session.clone(),
        });
        Ok(session)
    }

    fn persist_token(&self, token: &str) {
        if let Err(error) = self.store.save(token) {
            warn!(%error, "token could not be persisted; session is in-memory only");
        }
    }
}

fn unauthorized_on_rejection(error: ApiError) -> ApiError {
    match error.http_status() {
        Some(status) => ApiError::unauthorized(status, error.message().to_owned()),
        None => error,
    }
}
