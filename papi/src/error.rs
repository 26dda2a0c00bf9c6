//! Remote API error kinds and error value helpers.
//!
//! ```rust
//! use papi::{ApiError, ApiErrorKind};
//!
//! let remote = ApiError::remote(500, "server overloaded");
//! assert_eq!(remote.kind, ApiErrorKind::Remote);
//! assert_eq!(remote.status, Some(500));
//! assert!(remote.to_string().contains("server overloaded"));
//!
//! let token = ApiError::token(403);
//! assert_eq!(token.kind, ApiErrorKind::Token);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The CSRF token endpoint refused or returned no token.
    Token,
    /// Thread creation or invoke returned a non-success status.
    Remote,
    /// A success response whose body does not have the expected shape.
    MalformedResponse,
    /// The request never produced an HTTP response.
    Transport,
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
        }
    }

    pub fn token(status: u16) -> Self {
        Self::new(
            ApiErrorKind::Token,
            format!("CSRF token error: {status}"),
            Some(status),
        )
    }

    pub fn missing_token(status: u16) -> Self {
        Self::new(
            ApiErrorKind::Token,
            "CSRF token response carried no token header",
            Some(status),
        )
    }

    /// Builds a remote error whose message is the response body verbatim.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            format!("request failed with status {status}")
        } else {
            body
        };

        Self::new(ApiErrorKind::Remote, message, Some(status))
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::MalformedResponse, message, None)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Transport, message, None)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidRequest, message, None)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} ({status}): {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_keeps_body_verbatim() {
        let error = ApiError::remote(500, "server overloaded\n");
        assert_eq!(error.message, "server overloaded\n");
        assert_eq!(error.to_string(), "Remote (500): server overloaded\n");
    }

    #[test]
    fn remote_error_with_blank_body_falls_back_to_status() {
        let error = ApiError::remote(502, "  ");
        assert_eq!(error.message, "request failed with status 502");
    }

    #[test]
    fn token_error_carries_status() {
        let error = ApiError::token(401);
        assert_eq!(error.status, Some(401));
        assert_eq!(error.message, "CSRF token error: 401");
    }
}
