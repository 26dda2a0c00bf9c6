//! Conversation session control over the assistant/thread API.
//!
//! The [`ConversationController`] sequences thread creation, per-turn
//! exchanges and token acquisition for a single session, refuses a second
//! turn while one is in flight, and publishes [`SessionSnapshot`]s to its
//! observers after every change.
//!
//! ```rust
//! use pchat::SessionPhase;
//!
//! assert!(SessionPhase::AwaitingReply.is_busy());
//! assert!(!SessionPhase::Idle.is_active());
//! ```

mod controller;
mod error;
mod hooks;
mod naming;
mod observer;
mod types;

pub mod prelude {
    pub use crate::{
        ActiveThread, ChatError, ChatErrorKind, ConversationController,
        ConversationControllerBuilder, ConversationHooks, IgnoreReason, NoopConversationHooks,
        RemoteOperation, ReplyPolicy, SessionObserver, SessionPhase, SessionSnapshot,
        StartOutcome, SubmitOutcome, Turn, TurnStatus,
    };
    pub use pcommon::{AssistantId, ThreadId};
}

pub use controller::{ConversationController, ConversationControllerBuilder};
pub use error::{ChatError, ChatErrorKind};
pub use hooks::{ConversationHooks, NoopConversationHooks, RemoteOperation};
pub use naming::{DEFAULT_THREAD_PREFIX, ThreadNamer, TimestampThreadNamer};
pub use observer::SessionObserver;
pub use types::{
    ActiveThread, DEFAULT_PLACEHOLDER, IgnoreReason, ReplyPolicy, SessionPhase, SessionSnapshot,
    StartOutcome, SubmitOutcome, Turn, TurnStatus,
};
pub use pcommon::{AssistantId, ThreadId};
