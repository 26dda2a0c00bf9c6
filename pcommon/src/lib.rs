//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use pcommon::{AssistantId, ThreadId};
//!
//! let assistant = AssistantId::from("assistant-1");
//! let thread = ThreadId::new("thread-1");
//!
//! assert_eq!(assistant.as_str(), "assistant-1");
//! assert_eq!(thread.to_string(), "thread-1");
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod ids {
    //! Identifier newtypes for remote assistants and their threads.
    //!
    //! ```rust
    //! use pcommon::{AssistantId, ThreadId};
    //!
    //! let assistant = AssistantId::new("  a-42 ");
    //! assert!(!assistant.is_blank());
    //! assert_eq!(assistant.as_str(), "a-42");
    //!
    //! let thread = ThreadId::from("t-42".to_string());
    //! assert_eq!(thread.as_str(), "t-42");
    //! ```

    use std::fmt::{Display, Formatter};

    /// Identifier of a remote assistant. Surrounding whitespace is dropped.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AssistantId(String);

    impl AssistantId {
        pub fn new(value: impl Into<String>) -> Self {
            let value = value.into();
            let trimmed = value.trim();
            if trimmed.len() == value.len() {
                Self(value)
            } else {
                Self(trimmed.to_string())
            }
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }

        pub fn is_blank(&self) -> bool {
            self.0.is_empty()
        }
    }

    impl Display for AssistantId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for AssistantId {
        fn from(value: String) -> Self {
            Self::new(value)
        }
    }

    impl From<&str> for AssistantId {
        fn from(value: &str) -> Self {
            Self::new(value)
        }
    }

    /// Opaque identifier of a server-side conversation thread.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ThreadId(String);

    impl ThreadId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for ThreadId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for ThreadId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for ThreadId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub use future::BoxFuture;
pub use ids::{AssistantId, ThreadId};
