//! Client for the remote assistant/thread REST API.
//!
//! The crate is layered the same way top to bottom: an [`HttpTransport`] seam
//! (with a reqwest implementation behind the `http-reqwest` feature), a
//! [`TokenProvider`] that fetches a fresh CSRF token for every mutating call,
//! and an [`AssistantApi`] that creates threads and invokes them.
//!
//! ```rust
//! use papi::{HttpRequest, HttpResponse, invoke_path};
//! use pcommon::{AssistantId, ThreadId};
//!
//! let path = invoke_path(&AssistantId::from("a1"), &ThreadId::from("t1"));
//! assert_eq!(path, "/api/v1/assistants/a1/threads/t1/actions/invoke");
//!
//! let request = HttpRequest::get("/api/v1/csrf-token");
//! assert!(request.body.is_none());
//! assert!(HttpResponse::new(200, "{}").is_success());
//! ```

mod client;
mod credentials;
mod error;
mod http;
mod payload;
mod token;
#[cfg(feature = "http-reqwest")]
mod transport;

pub mod prelude;

pub use client::{
    ASSISTANTS_PATH, AssistantApi, DEFAULT_ASSISTANT_LIST_LIMIT, HttpAssistantApi, invoke_path,
    threads_path,
};
pub use credentials::{HostAuth, SecretString};
pub use error::{ApiError, ApiErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use payload::{
    AssistantReply, AssistantSummary, PROMPT_TYPE_THREAD, ReplyShape, parse_assistant_list,
    parse_reply, parse_thread_id,
};
pub use token::{CSRF_TOKEN_HEADER, CSRF_TOKEN_PATH, CsrfToken, CsrfTokenProvider, TokenProvider};
#[cfg(feature = "http-reqwest")]
pub use transport::ReqwestTransport;
pub use pcommon::{AssistantId, BoxFuture, ThreadId};
