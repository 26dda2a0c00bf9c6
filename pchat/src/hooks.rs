//! Lifecycle hooks for conversation requests and session transitions.
//!
//! ```rust
//! use pchat::{ConversationHooks, NoopConversationHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ConversationHooks) {}
//!
//! let hooks = NoopConversationHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::fmt::{Display, Formatter};
use std::time::Duration;

use pcommon::ThreadId;

use crate::{ChatError, IgnoreReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    AcquireToken,
    CreateThread,
    Invoke,
}

impl Display for RemoteOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::AcquireToken => "acquire_token",
            Self::CreateThread => "create_thread",
            Self::Invoke => "invoke",
        })
    }
}

pub trait ConversationHooks: Send + Sync {
    fn on_request_start(&self, _operation: RemoteOperation) {}

    fn on_request_success(&self, _operation: RemoteOperation, _elapsed: Duration) {}

    fn on_request_failure(
        &self,
        _operation: RemoteOperation,
        _error: &ChatError,
        _elapsed: Duration,
    ) {
    }

    fn on_thread_created(&self, _thread: &ThreadId) {}

    fn on_input_rejected(&self, _error: &ChatError) {}

    fn on_input_ignored(&self, _reason: IgnoreReason) {}

    /// A result arrived for a session that has since been reset or restarted.
    fn on_stale_result(&self, _operation: RemoteOperation) {}

    fn on_session_reset(&self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConversationHooks;

impl ConversationHooks for NoopConversationHooks {}
