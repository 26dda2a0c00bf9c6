//! Tracing-based observability hooks for conversation requests.
//!
//! ```rust
//! use pchat::ConversationHooks;
//! use pobserve::TracingObservabilityHooks;
//!
//! fn accepts_conversation_hooks(_hooks: &dyn ConversationHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_conversation_hooks(&hooks);
//! ```

use std::time::Duration;

use pchat::{ChatError, ConversationHooks, IgnoreReason, RemoteOperation};
use pcommon::ThreadId;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ConversationHooks for TracingObservabilityHooks {
    fn on_request_start(&self, operation: RemoteOperation) {
        tracing::info!(
            phase = "conversation",
            event = "request_start",
            operation = %operation
        );
    }

    fn on_request_success(&self, operation: RemoteOperation, elapsed: Duration) {
        tracing::info!(
            phase = "conversation",
            event = "request_success",
            operation = %operation,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_request_failure(&self, operation: RemoteOperation, error: &ChatError, elapsed: Duration) {
        tracing::error!(
            phase = "conversation",
            event = "request_failure",
            operation = %operation,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            status = error.status,
            error = %error
        );
    }

    fn on_thread_created(&self, thread: &ThreadId) {
        tracing::info!(
            phase = "conversation",
            event = "thread_created",
            thread_id = %thread
        );
    }

    fn on_input_rejected(&self, error: &ChatError) {
        tracing::warn!(
            phase = "conversation",
            event = "input_rejected",
            error_kind = ?error.kind,
            error = %error
        );
    }

    fn on_input_ignored(&self, reason: IgnoreReason) {
        tracing::debug!(
            phase = "conversation",
            event = "input_ignored",
            reason = %reason
        );
    }

    fn on_stale_result(&self, operation: RemoteOperation) {
        tracing::debug!(
            phase = "conversation",
            event = "stale_result",
            operation = %operation
        );
    }

    fn on_session_reset(&self) {
        tracing::info!(phase = "conversation", event = "session_reset");
    }
}
