//! Presentation contract and the bridge from controller notifications.

use std::sync::{Arc, Mutex, PoisonError};

use pchat::{SessionObserver, SessionSnapshot};

use crate::ViewState;

/// The three user intents a presentation layer may forward to the
/// controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start(String),
    Submit(String),
    Reset,
}

pub trait PresentationAdapter: Send + Sync {
    /// Called with the full view after every session state change.
    fn render(&self, view: &ViewState);

    /// Called on every spinner tick while a request is in flight.
    fn show_spinner(&self, _frame: &str) {}
}

/// Re-renders an adapter whenever the controller publishes a snapshot.
///
/// Renders are serialized and a snapshot older than the last rendered one is
/// dropped, so the adapter always ends on the newest state. The adapter must
/// not call back into the controller from `render`.
pub struct PresenterObserver {
    adapter: Arc<dyn PresentationAdapter>,
    rendered: Mutex<Option<u64>>,
}

impl PresenterObserver {
    pub fn new(adapter: Arc<dyn PresentationAdapter>) -> Self {
        Self {
            adapter,
            rendered: Mutex::new(None),
        }
    }
}

impl SessionObserver for PresenterObserver {
    fn on_session_changed(&self, snapshot: &SessionSnapshot) {
        let mut rendered = self
            .rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if rendered.is_some_and(|revision| snapshot.revision < revision) {
            return;
        }

        self.adapter.render(&ViewState::from(snapshot));
        *rendered = Some(snapshot.revision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pchat::SessionPhase;

    #[derive(Default)]
    struct LastView(Mutex<Vec<ViewState>>);

    impl PresentationAdapter for LastView {
        fn render(&self, view: &ViewState) {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(view.clone());
        }
    }

    fn snapshot(revision: u64, phase: SessionPhase) -> SessionSnapshot {
        SessionSnapshot {
            revision,
            phase,
            thread: None,
            turns: Vec::new(),
            last_error: None,
        }
    }

    #[test]
    fn older_snapshot_arriving_late_is_not_rendered() {
        let adapter = Arc::new(LastView::default());
        let observer = PresenterObserver::new(adapter.clone());

        observer.on_session_changed(&snapshot(2, SessionPhase::Idle));
        observer.on_session_changed(&snapshot(1, SessionPhase::Starting));

        let views = adapter.0.lock().expect("views lock");
        assert_eq!(views.len(), 1);
        assert!(!views[0].loading);
        assert!(views[0].start_enabled);
    }

    #[test]
    fn same_revision_is_rendered_again() {
        let adapter = Arc::new(LastView::default());
        let observer = PresenterObserver::new(adapter.clone());

        observer.on_session_changed(&snapshot(3, SessionPhase::Starting));
        observer.on_session_changed(&snapshot(3, SessionPhase::Starting));
        observer.on_session_changed(&snapshot(4, SessionPhase::Ready));

        let views = adapter.0.lock().expect("views lock");
        assert_eq!(views.len(), 3);
        assert!(!views[2].loading);
    }
}
