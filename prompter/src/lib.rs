//! Unified facade over the prompter workspace crates.
//!
//! This crate is the single dependency for embedding the inquiry widget. It
//! re-exports the API client, conversation controller, presenters and
//! observability hooks, and adds configuration, host variable access and
//! runtime wiring.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use prompter::prelude::*;
//!
//! let variables = Arc::new(static_variables! { "vQuestion" => "What changed?" });
//! let presenter = Arc::new(TranscriptPresenter::new());
//!
//! let widget = build_widget(
//!     &ConnectionConfig::new("https://tenant.example.com"),
//!     WidgetConfig::new("assistant-1", "vQuestion"),
//!     variables,
//!     presenter.clone(),
//! )
//! .expect("widget should build");
//!
//! assert_eq!(widget.snapshot().phase, SessionPhase::Idle);
//! assert_eq!(presenter.frame()[0], "[Start inquiry]");
//! ```

mod config;
mod error;
mod host;
mod macros;
mod widget;

pub mod prelude;
#[cfg(feature = "http-reqwest")]
pub mod runtime;

pub use papi;
pub use pchat;
pub use pcommon;
pub use pobserve;
pub use pview;

pub use config::{ConnectionConfig, DEFAULT_TIMEOUT, MISSING_CONFIGURATION_MESSAGE, WidgetConfig};
pub use error::{WidgetError, WidgetErrorKind};
pub use host::{
    AssistantOption, StaticVariables, VariableContent, VariableResolver, assistant_options,
    selectable_variable_names, variable_options,
};
pub use widget::{DispatchOutcome, Widget};

pub use papi::{
    ApiError, ApiErrorKind, AssistantApi, AssistantReply, AssistantSummary, CsrfToken,
    CsrfTokenProvider, HostAuth, HttpAssistantApi, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, SecretString, TokenProvider,
};
#[cfg(feature = "http-reqwest")]
pub use papi::ReqwestTransport;
pub use pchat::{
    ChatError, ChatErrorKind, ConversationController, ConversationControllerBuilder,
    ConversationHooks, IgnoreReason, NoopConversationHooks, RemoteOperation, ReplyPolicy,
    SessionObserver, SessionPhase, SessionSnapshot, StartOutcome, SubmitOutcome, Turn,
    TurnStatus,
};
pub use pcommon::{AssistantId, BoxFuture, ThreadId};
pub use pobserve::{
    MetricsObservabilityHooks, SafeConversationHooks, SafeSessionObserver,
    TracingObservabilityHooks,
};
pub use pview::{
    Intent, MinimalPresenter, PresentationAdapter, PresenterObserver, SPINNER_INTERVAL, Speaker,
    Spinner, TranscriptEntry, TranscriptPresenter, ViewState,
};

#[cfg(feature = "http-reqwest")]
pub use runtime::{
    ApiBundle, api_bundle, build_controller, build_controller_with_hooks, build_widget,
    default_hooks, http_transport,
};
