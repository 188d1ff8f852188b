//! Wire payloads for the authentication endpoints.

use serde::Deserialize;

/// Response of `POST auth/token/`: the token plus the identity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    /// Opaque bearer token.
    pub token: String,
    /// Backend user identifier.
    pub user_id: i64,
    /// Account username.
    pub username: String,
    /// Account email.
    pub email: String,
}

/// Response of `GET auth/user/`: the identity behind the presented token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    /// Backend user identifier.
    pub id: i64,
    /// Account username.
    pub username: String,
    /// Account email.
    pub email: String,
}

/// Response of `POST auth/register/`: the created account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisteredAccount {
    /// Backend user identifier.
    pub id: i64,
    /// Account username.
    pub username: String,
    /// Account email.
    pub email: String,
}
