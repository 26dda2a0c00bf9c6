use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use pchat::{
    ChatError, ConversationHooks, IgnoreReason, RemoteOperation, SessionObserver, SessionSnapshot,
};
use pcommon::ThreadId;

pub struct SafeConversationHooks<H> {
    inner: H,
}

impl<H> SafeConversationHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ConversationHooks for SafeConversationHooks<H>
where
    H: ConversationHooks,
{
    fn on_request_start(&self, operation: RemoteOperation) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_request_start(operation)));
    }

    fn on_request_success(&self, operation: RemoteOperation, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_success(operation, elapsed)
        }));
    }

    fn on_request_failure(&self, operation: RemoteOperation, error: &ChatError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_failure(operation, error, elapsed)
        }));
    }

    fn on_thread_created(&self, thread: &ThreadId) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_thread_created(thread)));
    }

    fn on_input_rejected(&self, error: &ChatError) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_input_rejected(error)));
    }

    fn on_input_ignored(&self, reason: IgnoreReason) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_input_ignored(reason)));
    }

    fn on_stale_result(&self, operation: RemoteOperation) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_stale_result(operation)));
    }

    fn on_session_reset(&self) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_session_reset()));
    }
}

/// Keeps a panicking presenter from unwinding into the controller.
pub struct SafeSessionObserver<O> {
    inner: O,
}

impl<O> SafeSessionObserver<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }
}

impl<O> SessionObserver for SafeSessionObserver<O>
where
    O: SessionObserver,
{
    fn on_session_changed(&self, snapshot: &SessionSnapshot) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_session_changed(snapshot)));
    }
}
