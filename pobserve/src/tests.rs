use std::sync::{Arc, Mutex};
use std::time::Duration;

use pchat::{
    ChatError, ConversationHooks, IgnoreReason, RemoteOperation, SessionObserver, SessionPhase,
    SessionSnapshot,
};
use pcommon::ThreadId;

use crate::{
    MetricsObservabilityHooks, SafeConversationHooks, SafeSessionObserver,
    TracingObservabilityHooks,
};

fn exercise_all_callbacks(hooks: &dyn ConversationHooks) {
    let remote = ChatError::remote("server overloaded", Some(500));
    let empty = ChatError::empty_input("Variable is empty");

    hooks.on_request_start(RemoteOperation::AcquireToken);
    hooks.on_request_success(RemoteOperation::AcquireToken, Duration::from_millis(5));
    hooks.on_request_start(RemoteOperation::CreateThread);
    hooks.on_request_failure(
        RemoteOperation::CreateThread,
        &remote,
        Duration::from_millis(20),
    );
    hooks.on_thread_created(&ThreadId::from("thread-1"));
    hooks.on_input_rejected(&empty);
    hooks.on_input_ignored(IgnoreReason::TurnInFlight);
    hooks.on_stale_result(RemoteOperation::Invoke);
    hooks.on_session_reset();
}

fn idle_snapshot() -> SessionSnapshot {
    SessionSnapshot {
        revision: 0,
        phase: SessionPhase::Idle,
        thread: None,
        turns: Vec::new(),
        last_error: None,
    }
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    exercise_all_callbacks(&TracingObservabilityHooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    exercise_all_callbacks(&MetricsObservabilityHooks);
}

struct PanickingHooks;

impl ConversationHooks for PanickingHooks {
    fn on_request_start(&self, _operation: RemoteOperation) {
        panic!("request start panic");
    }

    fn on_request_failure(
        &self,
        _operation: RemoteOperation,
        _error: &ChatError,
        _elapsed: Duration,
    ) {
        panic!("request failure panic");
    }

    fn on_session_reset(&self) {
        panic!("reset panic");
    }
}

#[test]
fn safe_conversation_hooks_swallow_panics() {
    let hooks = SafeConversationHooks::new(PanickingHooks);
    exercise_all_callbacks(&hooks);
}

#[derive(Default)]
struct RecordingHooks {
    events: Mutex<Vec<String>>,
}

impl ConversationHooks for RecordingHooks {
    fn on_request_start(&self, operation: RemoteOperation) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("start:{operation}"));
    }

    fn on_input_ignored(&self, reason: IgnoreReason) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("ignored:{reason}"));
    }
}

#[test]
fn safe_conversation_hooks_forward_to_inner() {
    let inner = Arc::new(RecordingHooks::default());
    let hooks = SafeConversationHooks::new(ForwardingHooks(inner.clone()));

    hooks.on_request_start(RemoteOperation::Invoke);
    hooks.on_input_ignored(IgnoreReason::BlankInput);

    assert_eq!(
        *inner.events.lock().expect("events lock"),
        vec!["start:invoke", "ignored:blank_input"]
    );
}

struct ForwardingHooks(Arc<RecordingHooks>);

impl ConversationHooks for ForwardingHooks {
    fn on_request_start(&self, operation: RemoteOperation) {
        self.0.on_request_start(operation);
    }

    fn on_input_ignored(&self, reason: IgnoreReason) {
        self.0.on_input_ignored(reason);
    }
}

#[test]
fn safe_session_observer_swallows_presenter_panics() {
    let observer = SafeSessionObserver::new(|_snapshot: &SessionSnapshot| {
        panic!("render panic");
    });

    observer.on_session_changed(&idle_snapshot());
}
