//! Chat-layer errors and classification.
//!
//! ```rust
//! use papi::ApiError;
//! use pchat::{ChatError, ChatErrorKind};
//!
//! let error = ChatError::from(ApiError::remote(500, "server overloaded"));
//! assert_eq!(error.kind, ChatErrorKind::Remote);
//! assert_eq!(error.status, Some(500));
//! assert_eq!(error.message, "server overloaded");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use papi::{ApiError, ApiErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    /// Local validation failed; no network call was attempted.
    EmptyInput,
    InvalidRequest,
    Token,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
        }
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::EmptyInput, message, None)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message, None)
    }

    pub fn token(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::new(ChatErrorKind::Token, message, status)
    }

    pub fn remote(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::new(ChatErrorKind::Remote, message, status)
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ChatError {}

impl From<ApiError> for ChatError {
    fn from(value: ApiError) -> Self {
        match value.kind {
            ApiErrorKind::Token => ChatError::token(value.message, value.status),
            ApiErrorKind::Remote | ApiErrorKind::Transport => {
                ChatError::remote(value.message, value.status)
            }
            ApiErrorKind::MalformedResponse => ChatError::remote(
                format!("malformed response: {}", value.message),
                value.status,
            ),
            ApiErrorKind::InvalidRequest => ChatError::invalid_request(value.message),
        }
    }
}
