//! Assistants/threads client contract and HTTP implementation.

use std::sync::Arc;

use pcommon::{AssistantId, BoxFuture, ThreadId};

use crate::payload::{CreateThreadBody, InvokeBody, parse_assistant_list, parse_reply, parse_thread_id};
use crate::{
    ApiError, AssistantReply, AssistantSummary, CSRF_TOKEN_HEADER, CsrfToken, HttpRequest,
    HttpResponse, HttpTransport,
};

pub const ASSISTANTS_PATH: &str = "/api/v1/assistants";
pub const DEFAULT_ASSISTANT_LIST_LIMIT: u32 = 100;

pub fn threads_path(assistant: &AssistantId) -> String {
    format!("{ASSISTANTS_PATH}/{assistant}/threads")
}

pub fn invoke_path(assistant: &AssistantId, thread: &ThreadId) -> String {
    format!("{ASSISTANTS_PATH}/{assistant}/threads/{thread}/actions/invoke")
}

pub trait AssistantApi: Send + Sync {
    fn create_thread<'a>(
        &'a self,
        assistant: &'a AssistantId,
        name: &'a str,
        token: &'a CsrfToken,
    ) -> BoxFuture<'a, Result<ThreadId, ApiError>>;

    fn invoke<'a>(
        &'a self,
        assistant: &'a AssistantId,
        thread: &'a ThreadId,
        prompt: &'a str,
        token: &'a CsrfToken,
    ) -> BoxFuture<'a, Result<AssistantReply, ApiError>>;

    fn list_assistants<'a>(
        &'a self,
        limit: u32,
    ) -> BoxFuture<'a, Result<Vec<AssistantSummary>, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct HttpAssistantApi {
    transport: Arc<dyn HttpTransport>,
}

impl HttpAssistantApi {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    fn mutating_request(
        path: String,
        body: serde_json::Value,
        token: &CsrfToken,
    ) -> HttpRequest {
        HttpRequest::post(path, body)
            .with_header("Content-Type", "application/json")
            .with_header(CSRF_TOKEN_HEADER, token.expose())
    }

    async fn send_checked(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::remote(response.status, response.body));
        }

        Ok(response)
    }
}

impl AssistantApi for HttpAssistantApi {
    fn create_thread<'a>(
        &'a self,
        assistant: &'a AssistantId,
        name: &'a str,
        token: &'a CsrfToken,
    ) -> BoxFuture<'a, Result<ThreadId, ApiError>> {
        Box::pin(async move {
            if assistant.is_blank() {
                return Err(ApiError::invalid_request("assistant id must not be empty"));
            }

            let body = serde_json::to_value(CreateThreadBody { name })
                .map_err(|err| ApiError::invalid_request(err.to_string()))?;
            let request = Self::mutating_request(threads_path(assistant), body, token);
            let response = self.send_checked(request).await?;

            parse_thread_id(&response.body)
        })
    }

    fn invoke<'a>(
        &'a self,
        assistant: &'a AssistantId,
        thread: &'a ThreadId,
        prompt: &'a str,
        token: &'a CsrfToken,
    ) -> BoxFuture<'a, Result<AssistantReply, ApiError>> {
        Box::pin(async move {
            let body = serde_json::to_value(InvokeBody::thread_prompt(prompt))
                .map_err(|err| ApiError::invalid_request(err.to_string()))?;
            let request = Self::mutating_request(invoke_path(assistant, thread), body, token);
            let response = self.send_checked(request).await?;

            parse_reply(&response.body)
        })
    }

    fn list_assistants<'a>(
        &'a self,
        limit: u32,
    ) -> BoxFuture<'a, Result<Vec<AssistantSummary>, ApiError>> {
        Box::pin(async move {
            let request = HttpRequest::get(format!("{ASSISTANTS_PATH}?limit={limit}"));
            let response = self.send_checked(request).await?;

            parse_assistant_list(&response.body)
        })
    }
}
