use std::error::Error;
use std::fmt::{Display, Formatter};

use papi::ApiError;
use pchat::{ChatError, ChatErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetErrorKind {
    Configuration,
    /// The host application failed to supply a variable.
    Host,
    Transport,
    /// A conversation failure, keeping the controller's classification.
    Chat(ChatErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetError {
    pub kind: WidgetErrorKind,
    pub message: String,
}

impl WidgetError {
    pub fn new(kind: WidgetErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(WidgetErrorKind::Configuration, message)
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::new(WidgetErrorKind::Host, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(WidgetErrorKind::Transport, message)
    }

    pub fn chat(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self::new(WidgetErrorKind::Chat(kind), message)
    }
}

impl Display for WidgetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for WidgetError {}

impl From<ChatError> for WidgetError {
    fn from(value: ChatError) -> Self {
        Self::chat(value.kind, value.message)
    }
}

impl From<ApiError> for WidgetError {
    fn from(value: ApiError) -> Self {
        Self::transport(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_errors_keep_their_message() {
        let error = WidgetError::from(ChatError::empty_input("Variable is empty"));
        assert_eq!(error.kind, WidgetErrorKind::Chat(ChatErrorKind::EmptyInput));
        assert_eq!(error.message, "Variable is empty");
        assert_eq!(error.to_string(), "Chat(EmptyInput): Variable is empty");
    }

    #[test]
    fn remote_and_token_failures_stay_distinguishable() {
        let remote = WidgetError::from(ChatError::remote("upstream failed", Some(502)));
        let token = WidgetError::from(ChatError::token("no csrf header", None));

        assert_eq!(remote.kind, WidgetErrorKind::Chat(ChatErrorKind::Remote));
        assert_eq!(token.kind, WidgetErrorKind::Chat(ChatErrorKind::Token));
        assert_ne!(remote.kind, token.kind);
    }

    #[test]
    fn api_errors_become_transport_errors() {
        let error = WidgetError::from(ApiError::transport("connection refused"));
        assert_eq!(error.kind, WidgetErrorKind::Transport);
        assert!(error.message.contains("connection refused"));
    }
}
