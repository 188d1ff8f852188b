//! Session state owned by the auth context.
//!
//! The session lifecycle is a small machine: `Unauthenticated` until a login
//! or a persisted-token restore, `PendingVerification` between a restore and
//! the identity round trip, `Authenticated` once the backend has confirmed
//! who the token belongs to. The gateway only ever reads the current token
//! through a [`SessionHandle`]; every transition goes through the auth
//! context.

use std::sync::{Arc, RwLock};

/// Established identity attached to a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user_id: i64,
    username: String,
    email: String,
}

impl Session {
    /// Assemble a session from backend-confirmed identity fields.
    pub fn new(
        token: impl Into<String>,
        user_id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            user_id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Opaque bearer token presented on authenticated requests.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Backend user identifier.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Account username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Account email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Authentication lifecycle states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No token held; requests go out anonymously.
    #[default]
    Unauthenticated,
    /// A persisted token was restored and awaits identity verification;
    /// requests already present it optimistically.
    PendingVerification {
        /// The restored, not yet verified token.
        token: String,
    },
    /// The backend has confirmed the session identity.
    Authenticated {
        /// The confirmed session.
        session: Session,
    },
}

impl AuthState {
    /// Token to attach to outgoing requests, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated => None,
            Self::PendingVerification { token } => Some(token.as_str()),
            Self::Authenticated { session } => Some(session.token()),
        }
    }

    /// Whether the state carries a confirmed identity.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Shared, lock-guarded view of the current [`AuthState`].
///
/// Cloning the handle shares the same underlying state. Reads copy the token
/// out under a read lock and never block on network activity; only the auth
/// context writes.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<AuthState>>,
}

impl SessionHandle {
    /// A handle starting out unauthenticated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current token, when one is held.
    pub fn current_token(&self) -> Option<String> {
        self.read_state(|state| state.token().map(str::to_owned))
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.read_state(Clone::clone)
    }

    /// Whether the current state carries a confirmed identity.
    pub fn is_authenticated(&self) -> bool {
        self.read_state(AuthState::is_authenticated)
    }

    pub(crate) fn replace(&self, state: AuthState) {
        match self.inner.write() {
            Ok(mut guard) => *guard = state,
            Err(poisoned) => *poisoned.into_inner() = state,
        }
    }

    fn read_state<T>(&self, f: impl FnOnce(&AuthState) -> T) -> T {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }
}
