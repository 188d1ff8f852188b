//! Authentication input values.
//!
//! Keep raw form input outside the services by exposing constructors that
//! validate string inputs before anything talks to the backend.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string sent to the token endpoint.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Domain error returned when a registration payload is invalid.
///
/// Registration deliberately validates nothing beyond the confirmation
/// match; every other rule (username availability, email shape, password
/// strength) belongs to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// The password and its confirmation differ.
    PasswordMismatch,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PasswordMismatch => write!(f, "passwords do not match"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Validated account-creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration, requiring the confirmation to match.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, RegistrationValidationError> {
        if password != confirmation {
            return Err(RegistrationValidationError::PasswordMismatch);
        }
        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Requested account email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Chosen password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
