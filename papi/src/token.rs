//! Per-request CSRF token acquisition.
//!
//! Tokens are never cached: every mutating request asks for a fresh one so a
//! rotated or expired token surfaces as a token error on that request.

use std::sync::Arc;

use pcommon::BoxFuture;

use crate::{ApiError, HttpRequest, HttpTransport, SecretString};

pub const CSRF_TOKEN_PATH: &str = "/api/v1/csrf-token";
pub const CSRF_TOKEN_HEADER: &str = "qlik-csrf-token";

/// Anti-forgery token attached to a single mutating request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(SecretString);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value))
    }

    pub fn expose(&self) -> &str {
        self.0.expose()
    }
}

pub trait TokenProvider: Send + Sync {
    fn acquire<'a>(&'a self) -> BoxFuture<'a, Result<CsrfToken, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct CsrfTokenProvider {
    transport: Arc<dyn HttpTransport>,
}

impl CsrfTokenProvider {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

impl TokenProvider for CsrfTokenProvider {
    fn acquire<'a>(&'a self) -> BoxFuture<'a, Result<CsrfToken, ApiError>> {
        Box::pin(async move {
            let response = self.transport.send(HttpRequest::get(CSRF_TOKEN_PATH)).await?;
            if !response.is_success() {
                return Err(ApiError::token(response.status));
            }

            match response.header(CSRF_TOKEN_HEADER) {
                Some(token) if !token.is_empty() => Ok(CsrfToken::new(token)),
                _ => Err(ApiError::missing_token(response.status)),
            }
        })
    }
}
