//! Connection and widget configuration.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use prompter::{ConnectionConfig, HostAuth, WidgetConfig};
//!
//! let connection = ConnectionConfig::new("https://tenant.example.com")
//!     .with_timeout(Duration::from_secs(30))
//!     .with_auth(HostAuth::cookie("session=abc"));
//! assert!(connection.validate().is_ok());
//!
//! let widget = WidgetConfig::new("assistant-1", "vQuestion");
//! assert!(widget.validate().is_ok());
//! assert!(WidgetConfig::default().validate().is_err());
//! ```

use std::time::Duration;

use papi::HostAuth;
use pcommon::AssistantId;

use crate::WidgetError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);
pub const MISSING_CONFIGURATION_MESSAGE: &str =
    "Please configure both Assistant and Question Variable.";

#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub auth: HostAuth,
}

impl ConnectionConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            auth: HostAuth::None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_auth(mut self, auth: HostAuth) -> Self {
        self.auth = auth;
        self
    }

    pub fn validate(&self) -> Result<(), WidgetError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(WidgetError::configuration("base url must not be empty"));
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(WidgetError::configuration(format!(
                "base url must use http or https: {base_url}"
            )));
        }

        if self.timeout.is_zero() {
            return Err(WidgetError::configuration("timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// The two properties an embedder sets on the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    pub assistant_id: String,
    /// Name of the host variable holding the opening question.
    pub source_variable: String,
}

impl WidgetConfig {
    pub fn new(assistant_id: impl Into<String>, source_variable: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            source_variable: source_variable.into(),
        }
    }

    pub fn validate(&self) -> Result<(), WidgetError> {
        if self.assistant_id.trim().is_empty() || self.source_variable.trim().is_empty() {
            return Err(WidgetError::configuration(MISSING_CONFIGURATION_MESSAGE));
        }

        Ok(())
    }

    pub fn assistant(&self) -> AssistantId {
        AssistantId::new(self.assistant_id.as_str())
    }
}
