//! Session, turn, phase and outcome types.

use std::fmt::{Display, Formatter};

use pcommon::{AssistantId, ThreadId};

use crate::ChatError;

/// Assistant text shown while a reply is outstanding.
pub const DEFAULT_PLACEHOLDER: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Pending,
    Answered,
    /// The exchange failed; the assistant text is still the placeholder.
    Failed,
}

/// One user input paired with its (eventually filled) assistant response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    user_text: String,
    assistant_text: String,
    status: TurnStatus,
}

impl Turn {
    pub(crate) fn pending(user_text: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            assistant_text: placeholder.into(),
            status: TurnStatus::Pending,
        }
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    pub fn assistant_text(&self) -> &str {
        &self.assistant_text
    }

    pub fn status(&self) -> TurnStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == TurnStatus::Pending
    }

    /// Replaces the placeholder. Only a pending turn can be answered, so the
    /// assistant text changes at most once.
    pub(crate) fn answer(&mut self, text: impl Into<String>) -> bool {
        if !self.is_pending() {
            return false;
        }

        self.assistant_text = text.into();
        self.status = TurnStatus::Answered;
        true
    }

    pub(crate) fn fail(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }

        self.status = TurnStatus::Failed;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// Thread creation is in flight.
    Starting,
    /// A thread is active and no turn is pending.
    Ready,
    /// A thread is active and its latest turn awaits a reply.
    AwaitingReply,
}

impl SessionPhase {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Ready | Self::AwaitingReply)
    }

    pub fn is_busy(self) -> bool {
        matches!(self, Self::Starting | Self::AwaitingReply)
    }
}

impl Display for SessionPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Starting => "starting",
            Self::Ready => "ready",
            Self::AwaitingReply => "awaiting_reply",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveThread {
    pub assistant: AssistantId,
    pub thread: ThreadId,
}

/// Published, read-only view of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Increases with every published change; a higher revision is newer.
    pub revision: u64,
    pub phase: SessionPhase,
    pub thread: Option<ActiveThread>,
    pub turns: Vec<Turn>,
    pub last_error: Option<ChatError>,
}

impl SessionSnapshot {
    pub fn thread_id(&self) -> Option<&ThreadId> {
        self.thread.as_ref().map(|active| &active.thread)
    }

    pub fn pending_turn(&self) -> Option<&Turn> {
        self.turns.iter().find(|turn| turn.is_pending())
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SessionPhase::Idle
    }
}

/// What to do with a successful invoke response that carries no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyPolicy {
    /// Treat it as an empty reply.
    #[default]
    Lenient,
    /// Treat it as a malformed response.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoActiveThread,
    TurnInFlight,
    BlankInput,
}

impl Display for IgnoreReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NoActiveThread => "no_active_thread",
            Self::TurnInFlight => "turn_in_flight",
            Self::BlankInput => "blank_input",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started { thread: ThreadId, reply: String },
    /// The session was reset while the start was in flight.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Answered { reply: String },
    Ignored(IgnoreReason),
    /// The session was reset while the turn was in flight.
    Discarded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_is_answered_at_most_once() {
        let mut turn = Turn::pending("hello", DEFAULT_PLACEHOLDER);
        assert!(turn.is_pending());
        assert_eq!(turn.assistant_text(), "...");

        assert!(turn.answer("first"));
        assert!(!turn.answer("second"));
        assert!(!turn.fail());
        assert_eq!(turn.assistant_text(), "first");
        assert_eq!(turn.status(), TurnStatus::Answered);
    }

    #[test]
    fn failed_turn_keeps_placeholder() {
        let mut turn = Turn::pending("hello", DEFAULT_PLACEHOLDER);
        assert!(turn.fail());
        assert_eq!(turn.assistant_text(), DEFAULT_PLACEHOLDER);
        assert_eq!(turn.status(), TurnStatus::Failed);
        assert!(!turn.answer("late"));
    }

    #[test]
    fn phase_classification_helpers() {
        assert!(SessionPhase::Ready.is_active());
        assert!(SessionPhase::AwaitingReply.is_active());
        assert!(!SessionPhase::Starting.is_active());
        assert!(SessionPhase::Starting.is_busy());
        assert!(!SessionPhase::Idle.is_busy());
        assert_eq!(SessionPhase::AwaitingReply.to_string(), "awaiting_reply");
    }
}
