//! Common `papi` imports for downstream crates.

pub use crate::{
    ApiError, ApiErrorKind, AssistantApi, AssistantReply, AssistantSummary, CsrfToken,
    CsrfTokenProvider, HostAuth, HttpAssistantApi, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, ReplyShape, TokenProvider,
};
pub use pcommon::{AssistantId, BoxFuture, ThreadId};
