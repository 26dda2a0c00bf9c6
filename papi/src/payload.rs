//! Assistant/thread HTTP payload serde models and response normalization.
//!
//! The service answers either with a bare object or with the same object
//! wrapped in a `data` envelope. Parsers here try the envelope first, then the
//! bare form, and hand the caller one typed value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pcommon::ThreadId;

use crate::ApiError;

pub const PROMPT_TYPE_THREAD: &str = "thread";

#[derive(Debug, Serialize)]
pub(crate) struct CreateThreadBody<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct InvokeBody<'a> {
    pub input: InvokeInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvokeInput<'a> {
    pub prompt: &'a str,
    pub prompt_type: &'static str,
    pub include_text: bool,
}

impl<'a> InvokeBody<'a> {
    pub fn thread_prompt(prompt: &'a str) -> Self {
        Self {
            input: InvokeInput {
                prompt,
                prompt_type: PROMPT_TYPE_THREAD,
                include_text: true,
            },
        }
    }
}

/// Where the reply text was found in an invoke response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    /// `{"data": {"output": ...}}`
    Envelope,
    /// `{"output": ...}`
    Bare,
    /// Neither form carried an output string.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    pub shape: ReplyShape,
}

impl AssistantReply {
    pub fn new(text: impl Into<String>, shape: ReplyShape) -> Self {
        Self {
            text: text.into(),
            shape,
        }
    }

    pub fn missing() -> Self {
        Self::new(String::new(), ReplyShape::Missing)
    }

    pub fn has_output(&self) -> bool {
        self.shape != ReplyShape::Missing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssistantSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct AssistantListBody {
    #[serde(default)]
    data: Vec<AssistantSummary>,
}

fn parse_object(body: &str, what: &str) -> Result<serde_json::Map<String, Value>, ApiError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::malformed(format!("{what} is not a JSON object"))),
        Err(err) => Err(ApiError::malformed(format!("{what} is not valid JSON: {err}"))),
    }
}

fn id_of(object: &serde_json::Map<String, Value>) -> Option<String> {
    match object.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

pub fn parse_thread_id(body: &str) -> Result<ThreadId, ApiError> {
    let map = parse_object(body, "thread response")?;
    map.get("data")
        .and_then(Value::as_object)
        .and_then(id_of)
        .or_else(|| id_of(&map))
        .map(ThreadId::new)
        .ok_or_else(|| ApiError::malformed("thread response carries no thread id"))
}

pub fn parse_reply(body: &str) -> Result<AssistantReply, ApiError> {
    let map = parse_object(body, "invoke response")?;

    if let Some(text) = map
        .get("data")
        .and_then(|data| data.get("output"))
        .and_then(Value::as_str)
    {
        return Ok(AssistantReply::new(text, ReplyShape::Envelope));
    }

    if let Some(text) = map.get("output").and_then(Value::as_str) {
        return Ok(AssistantReply::new(text, ReplyShape::Bare));
    }

    Ok(AssistantReply::missing())
}

pub fn parse_assistant_list(body: &str) -> Result<Vec<AssistantSummary>, ApiError> {
    serde_json::from_str::<AssistantListBody>(body)
        .map(|parsed| parsed.data)
        .map_err(|err| ApiError::malformed(format!("assistant list is not valid: {err}")))
}
