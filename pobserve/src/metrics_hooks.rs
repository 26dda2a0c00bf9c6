//! Metrics-based observability hooks for conversation requests.
//!
//! ```rust
//! use pchat::ConversationHooks;
//! use pobserve::MetricsObservabilityHooks;
//!
//! fn accepts_conversation_hooks(_hooks: &dyn ConversationHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_conversation_hooks(&hooks);
//! ```

use std::time::Duration;

use pchat::{ChatError, ConversationHooks, IgnoreReason, RemoteOperation};
use pcommon::ThreadId;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ConversationHooks for MetricsObservabilityHooks {
    fn on_request_start(&self, operation: RemoteOperation) {
        metrics::counter!(
            "prompter_request_start_total",
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_request_success(&self, operation: RemoteOperation, elapsed: Duration) {
        metrics::counter!(
            "prompter_request_success_total",
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "prompter_request_duration_seconds",
            "operation" => operation.to_string(),
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_request_failure(&self, operation: RemoteOperation, error: &ChatError, elapsed: Duration) {
        metrics::counter!(
            "prompter_request_failure_total",
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "prompter_request_duration_seconds",
            "operation" => operation.to_string(),
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_thread_created(&self, _thread: &ThreadId) {
        metrics::counter!("prompter_thread_created_total").increment(1);
    }

    fn on_input_rejected(&self, error: &ChatError) {
        metrics::counter!(
            "prompter_input_rejected_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_input_ignored(&self, reason: IgnoreReason) {
        metrics::counter!(
            "prompter_input_ignored_total",
            "reason" => reason.to_string()
        )
        .increment(1);
    }

    fn on_stale_result(&self, operation: RemoteOperation) {
        metrics::counter!(
            "prompter_stale_result_total",
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_session_reset(&self) {
        metrics::counter!("prompter_session_reset_total").increment(1);
    }
}
