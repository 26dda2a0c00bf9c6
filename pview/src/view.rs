//! Render-ready view state derived from session snapshots.
//!
//! ```rust
//! use pchat::{SessionPhase, SessionSnapshot};
//! use pview::ViewState;
//!
//! let idle = SessionSnapshot {
//!     revision: 0,
//!     phase: SessionPhase::Idle,
//!     thread: None,
//!     turns: Vec::new(),
//!     last_error: None,
//! };
//!
//! let view = ViewState::from(&idle);
//! assert!(view.start_enabled);
//! assert!(view.placeholder_visible);
//! assert!(!view.submit_enabled);
//! assert!(!view.loading);
//! ```

use std::fmt::{Display, Formatter};

use pchat::{SessionPhase, SessionSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

impl Display for Speaker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    /// Renders `Label: text`, keeping every literal line break as its own
    /// output line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self
            .text
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect::<Vec<_>>();

        if let Some(first) = lines.first_mut() {
            *first = format!("{}: {first}", self.speaker);
        }

        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub entries: Vec<TranscriptEntry>,
    pub loading: bool,
    pub start_enabled: bool,
    pub new_inquiry_visible: bool,
    pub submit_enabled: bool,
    pub placeholder_visible: bool,
    pub error: Option<String>,
}

impl From<&SessionSnapshot> for ViewState {
    fn from(snapshot: &SessionSnapshot) -> Self {
        let entries = snapshot
            .turns
            .iter()
            .flat_map(|turn| {
                [
                    TranscriptEntry {
                        speaker: Speaker::User,
                        text: turn.user_text().to_string(),
                    },
                    TranscriptEntry {
                        speaker: Speaker::Assistant,
                        text: turn.assistant_text().to_string(),
                    },
                ]
            })
            .collect::<Vec<_>>();
        let idle = snapshot.phase == SessionPhase::Idle;

        Self {
            placeholder_visible: idle && entries.is_empty(),
            entries,
            loading: snapshot.phase.is_busy(),
            start_enabled: idle,
            new_inquiry_visible: !idle,
            submit_enabled: snapshot.phase == SessionPhase::Ready,
            error: snapshot
                .last_error
                .as_ref()
                .map(|error| error.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_lines_preserve_line_breaks() {
        let entry = TranscriptEntry {
            speaker: Speaker::User,
            text: "line1\nline2".to_string(),
        };
        assert_eq!(entry.lines(), vec!["You: line1", "line2"]);
    }

    #[test]
    fn empty_entry_still_renders_label() {
        let entry = TranscriptEntry {
            speaker: Speaker::Assistant,
            text: String::new(),
        };
        assert_eq!(entry.lines(), vec!["Assistant: "]);
    }

    #[test]
    fn crlf_breaks_are_normalized() {
        let entry = TranscriptEntry {
            speaker: Speaker::Assistant,
            text: "a\r\nb".to_string(),
        };
        assert_eq!(entry.lines(), vec!["Assistant: a", "b"]);
    }
}
