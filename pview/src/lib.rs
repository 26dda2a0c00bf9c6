//! Presentation adapters that render published session state.
//!
//! A [`PresentationAdapter`] never owns conversation state. It receives a
//! [`ViewState`] derived from each controller snapshot and draws it; user
//! actions travel back as one of three [`Intent`]s.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pview::{MinimalPresenter, PresentationAdapter, PresenterObserver, TranscriptPresenter};
//!
//! let rich: Arc<dyn PresentationAdapter> = Arc::new(TranscriptPresenter::new());
//! let minimal: Arc<dyn PresentationAdapter> = Arc::new(MinimalPresenter::new());
//! let _observers = [PresenterObserver::new(rich), PresenterObserver::new(minimal)];
//! ```

mod adapter;
mod minimal;
mod spinner;
mod transcript;
mod view;

pub use adapter::{Intent, PresentationAdapter, PresenterObserver};
pub use minimal::{LOADING_LINE, MinimalPresenter};
pub use spinner::{SPINNER_INTERVAL, SPINNER_LABEL, Spinner, animate_while, spinner_frames};
pub use transcript::{
    FOLLOW_UP_HINT, IDLE_HINT, NEW_INQUIRY_LABEL, START_LABEL, SUBMIT_LABEL, TranscriptPresenter,
};
pub use view::{Speaker, TranscriptEntry, ViewState};
