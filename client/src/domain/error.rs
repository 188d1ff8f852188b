//! Client-side error taxonomy.
//!
//! Every failure a caller can observe is normalised into [`ApiError`], so
//! display layers switch on one set of kinds instead of inspecting raw
//! transport errors. Adapters map their failures into these variants at the
//! edge.

use thiserror::Error;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Normalised failure surfaced by the gateway and the services above it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication is missing, expired, or rejected (401/403).
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// HTTP status that produced the error.
        status: u16,
        /// Bounded preview of the response body.
        message: String,
    },
    /// The addressed resource does not exist (404).
    #[error("not found: {message}")]
    NotFound {
        /// HTTP status that produced the error.
        status: u16,
        /// Bounded preview of the response body.
        message: String,
    },
    /// The backend failed internally (5xx).
    #[error("server error: {message}")]
    ServerError {
        /// HTTP status that produced the error.
        status: u16,
        /// Bounded preview of the response body.
        message: String,
    },
    /// The request never produced a response.
    #[error("network failure: {message}")]
    NetworkFailure {
        /// Transport-level description.
        message: String,
    },
    /// The request or response payload was unusable (remaining 4xx,
    /// undecodable bodies).
    #[error("malformed exchange: {message}")]
    Malformed {
        /// HTTP status when a response existed.
        status: Option<u16>,
        /// Bounded preview of the offending payload or decode failure.
        message: String,
    },
}

impl ApiError {
    /// Helper for 401/403 failures.
    pub fn unauthorized(status: u16, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            status,
            message: message.into(),
        }
    }

    /// Helper for 404 failures.
    pub fn not_found(status: u16, message: impl Into<String>) -> Self {
        Self::NotFound {
            status,
            message: message.into(),
        }
    }

    /// Helper for 5xx failures.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// Helper for transport-level failures.
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkFailure {
            message: message.into(),
        }
    }

    /// Helper for payload failures without an HTTP status.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            status: None,
            message: message.into(),
        }
    }

    /// Map a non-2xx response into its taxonomy kind, carrying a bounded
    /// body preview as the message.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = status_message(status, body);
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            404 => Self::NotFound { status, message },
            500..=599 => Self::ServerError { status, message },
            _ => Self::Malformed {
                status: Some(status),
                message,
            },
        }
    }

    /// HTTP status associated with the failure, when a response existed.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::NotFound { status, .. }
            | Self::ServerError { status, .. } => Some(*status),
            Self::Malformed { status, .. } => *status,
            Self::NetworkFailure { .. } => None,
        }
    }

    /// Human-readable message carried by the failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::ServerError { message, .. }
            | Self::NetworkFailure { message }
            | Self::Malformed { message, .. } => message.as_str(),
        }
    }

    /// Whether the failure means the session is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Convenient result alias used throughout the client.
pub type ApiResult<T> = Result<T, ApiError>;

fn status_message(status: u16, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {status}")
    } else {
        format!("status {status}: {preview}")
    }
}

/// Collapse a response body into a bounded single-line preview.
pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for status mapping and previews.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::unauthorized(401, "Unauthorized")]
    #[case::forbidden(403, "Unauthorized")]
    #[case::missing(404, "NotFound")]
    #[case::server(500, "ServerError")]
    #[case::bad_gateway(502, "ServerError")]
    #[case::bad_request(400, "Malformed")]
    #[case::conflict(409, "Malformed")]
    fn maps_statuses_to_expected_kinds(#[case] status: u16, #[case] expected: &str) {
        let error = ApiError::from_status(status, b"{\"detail\":\"nope\"}");
        let kind = match error {
            ApiError::Unauthorized { .. } => "Unauthorized",
            ApiError::NotFound { .. } => "NotFound",
            ApiError::ServerError { .. } => "ServerError",
            ApiError::NetworkFailure { .. } => "NetworkFailure",
            ApiError::Malformed { .. } => "Malformed",
        };
        assert_eq!(kind, expected);
        assert_eq!(error.http_status(), Some(status));
    }

    #[rstest]
    fn preview_is_bounded_and_collapsed() {
        let body = format!("line one\nline   two {}", "x".repeat(400));
        let preview = body_preview(body.as_bytes());
        assert!(preview.starts_with("line one line two"));
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 163);
    }

    #[rstest]
    fn empty_body_reports_status_only() {
        let error = ApiError::from_status(500, b"");
        assert_eq!(error.message(), "status 500");
    }
}
