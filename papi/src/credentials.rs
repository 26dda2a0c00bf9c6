//! Redacted secret values and host credential policy.
//!
//! ```rust
//! use papi::{HostAuth, SecretString};
//!
//! let secret = SecretString::new("session=abc");
//! assert_eq!(format!("{secret:?}"), "[REDACTED]");
//! assert_eq!(secret.expose(), "session=abc");
//!
//! let auth = HostAuth::cookie("session=abc");
//! assert!(format!("{auth:?}").contains("REDACTED"));
//! ```

#[derive(Clone, PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Credentials the transport attaches to every request, standing in for a
/// browser's `credentials: "include"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HostAuth {
    #[default]
    None,
    /// Raw `Cookie` header value, e.g. a host session cookie.
    Cookie(SecretString),
    Bearer(SecretString),
}

impl HostAuth {
    pub fn cookie(value: impl Into<String>) -> Self {
        Self::Cookie(SecretString::new(value))
    }

    pub fn bearer(value: impl Into<String>) -> Self {
        Self::Bearer(SecretString::new(value))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
