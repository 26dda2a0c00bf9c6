//! Common imports for embedding the widget.

#[cfg(feature = "http-reqwest")]
pub use crate::{build_controller, build_widget};
pub use crate::static_variables;
pub use crate::{
    AssistantId, ChatError, ChatErrorKind, ConnectionConfig, ConversationController,
    DispatchOutcome, HostAuth, Intent, MinimalPresenter, PresentationAdapter, SessionPhase,
    SessionSnapshot, Spinner, StartOutcome, StaticVariables, SubmitOutcome, TranscriptPresenter,
    VariableContent, VariableResolver, ViewState, Widget, WidgetConfig, WidgetError,
    WidgetErrorKind,
};
