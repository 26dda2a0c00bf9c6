//! Bare transcript presenter.

use std::sync::{Mutex, PoisonError};

use crate::{PresentationAdapter, ViewState};

pub const LOADING_LINE: &str = "…";

#[derive(Debug, Default)]
pub struct MinimalPresenter {
    frame: Mutex<Vec<String>>,
}

impl MinimalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Vec<String> {
        self.frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PresentationAdapter for MinimalPresenter {
    fn render(&self, view: &ViewState) {
        let mut lines = view
            .entries
            .iter()
            .flat_map(|entry| entry.lines())
            .collect::<Vec<_>>();

        if view.loading {
            lines.push(LOADING_LINE.to_string());
        }

        if let Some(error) = &view.error {
            lines.push(format!("Error: {error}"));
        }

        *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = lines;
    }
}
