//! Full-featured text presenter: toolbar, transcript, spinner, follow-up
//! prompt and error line.

use std::sync::{Mutex, PoisonError};

use crate::{PresentationAdapter, Spinner, ViewState};

pub const START_LABEL: &str = "Start inquiry";
pub const NEW_INQUIRY_LABEL: &str = "New inquiry";
pub const SUBMIT_LABEL: &str = "Submit";
pub const FOLLOW_UP_HINT: &str = "Ask a follow-up question...";
pub const IDLE_HINT: &str = "Press \"Start inquiry\" to ask the configured question.";

#[derive(Debug)]
pub struct TranscriptPresenter {
    spinner_frame: Mutex<String>,
    last_view: Mutex<Option<ViewState>>,
    frame: Mutex<Vec<String>>,
}

impl TranscriptPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines produced by the latest draw.
    pub fn frame(&self) -> Vec<String> {
        self.frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn draw(&self, view: &ViewState) {
        let mut lines = vec![toolbar(view)];

        if view.placeholder_visible {
            lines.push(IDLE_HINT.to_string());
        }

        lines.extend(view.entries.iter().flat_map(|entry| entry.lines()));

        if view.loading {
            lines.push(
                self.spinner_frame
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone(),
            );
        }

        if view.new_inquiry_visible {
            let submit = if view.submit_enabled {
                format!("[{SUBMIT_LABEL}]")
            } else {
                format!("[{SUBMIT_LABEL} (disabled)]")
            };
            lines.push(format!("> {FOLLOW_UP_HINT} {submit}"));
        }

        if let Some(error) = &view.error {
            lines.push(format!("Error: {error}"));
        }

        *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = lines;
    }
}

impl Default for TranscriptPresenter {
    fn default() -> Self {
        Self {
            spinner_frame: Mutex::new(Spinner::default().frame(0)),
            last_view: Mutex::new(None),
            frame: Mutex::new(Vec::new()),
        }
    }
}

fn toolbar(view: &ViewState) -> String {
    let start = if view.start_enabled {
        format!("[{START_LABEL}]")
    } else {
        format!("[{START_LABEL} (disabled)]")
    };

    if view.new_inquiry_visible {
        format!("{start} [{NEW_INQUIRY_LABEL}]")
    } else {
        start
    }
}

impl PresentationAdapter for TranscriptPresenter {
    fn render(&self, view: &ViewState) {
        if !view.loading {
            *self
                .spinner_frame
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Spinner::default().frame(0);
        }

        *self
            .last_view
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(view.clone());
        self.draw(view);
    }

    /// Redraws the last view with `frame` if it is still loading.
    fn show_spinner(&self, frame: &str) {
        let last = self
            .last_view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let Some(view) = last.filter(|view| view.loading) else {
            return;
        };

        *self
            .spinner_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = frame.to_string();
        self.draw(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(loading: bool) -> ViewState {
        ViewState {
            entries: Vec::new(),
            loading,
            start_enabled: false,
            new_inquiry_visible: true,
            submit_enabled: !loading,
            placeholder_visible: false,
            error: None,
        }
    }

    #[test]
    fn spinner_frames_redraw_only_while_loading() {
        let presenter = TranscriptPresenter::new();
        presenter.render(&view(true));
        assert!(presenter.frame().contains(&"Thinking".to_string()));

        presenter.show_spinner("Thinking..");
        assert!(presenter.frame().contains(&"Thinking..".to_string()));

        presenter.render(&view(false));
        presenter.show_spinner("Thinking...");
        assert!(presenter.frame().iter().all(|line| !line.starts_with("Thinking")));
    }

    #[test]
    fn next_loading_view_restarts_from_first_frame() {
        let presenter = TranscriptPresenter::new();
        presenter.render(&view(true));
        presenter.show_spinner("Thinking...");
        presenter.render(&view(false));
        presenter.render(&view(true));

        assert!(presenter.frame().contains(&"Thinking".to_string()));
    }
}
