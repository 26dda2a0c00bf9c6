//! Collaborators supplied by the embedding host application.
//!
//! ```rust
//! use prompter::{VariableContent, selectable_variable_names};
//!
//! let content = VariableContent::definition("='What changed this quarter?'");
//! assert_eq!(content.text(), "='What changed this quarter?'");
//!
//! let names = selectable_variable_names(["vQuestion", "$hidden", "vRegion"]);
//! assert_eq!(names, vec!["vQuestion", "vRegion"]);
//! ```

use std::collections::BTreeMap;

use papi::{AssistantApi, DEFAULT_ASSISTANT_LIST_LIMIT};
use pcommon::BoxFuture;

use crate::WidgetError;

/// Raw value of a host variable. Either side may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableContent {
    pub string: Option<String>,
    pub definition: Option<String>,
}

impl VariableContent {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string: Some(value.into()),
            definition: None,
        }
    }

    pub fn definition(value: impl Into<String>) -> Self {
        Self {
            string: None,
            definition: Some(value.into()),
        }
    }

    /// The evaluated string when present and non-empty, else the definition,
    /// else an empty string.
    pub fn text(&self) -> String {
        self.string
            .as_deref()
            .filter(|value| !value.is_empty())
            .or(self.definition.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

pub trait VariableResolver: Send + Sync {
    /// Looks up `name`. An undefined variable resolves to empty content.
    fn resolve<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<VariableContent, WidgetError>>;

    fn variable_names<'a>(&'a self) -> BoxFuture<'a, Result<Vec<String>, WidgetError>>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticVariables {
    values: BTreeMap<String, VariableContent>,
}

impl StaticVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, content: VariableContent) -> Self {
        self.insert(name, content);
        self
    }

    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, VariableContent::string(value))
    }

    pub fn insert(&mut self, name: impl Into<String>, content: VariableContent) {
        self.values.insert(name.into(), content);
    }
}

impl VariableResolver for StaticVariables {
    fn resolve<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<VariableContent, WidgetError>> {
        Box::pin(async move { Ok(self.values.get(name).cloned().unwrap_or_default()) })
    }

    fn variable_names<'a>(&'a self) -> BoxFuture<'a, Result<Vec<String>, WidgetError>> {
        Box::pin(async move { Ok(self.values.keys().cloned().collect()) })
    }
}

/// Drops system variables (names starting with `$`).
pub fn selectable_variable_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| !name.starts_with('$'))
        .collect()
}

/// Variable names offered for the question property. Empty when the host
/// cannot list them.
pub async fn variable_options(resolver: &dyn VariableResolver) -> Vec<String> {
    resolver
        .variable_names()
        .await
        .map(selectable_variable_names)
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantOption {
    pub value: String,
    pub label: String,
}

/// Assistants offered for the assistant property. Empty on any failure.
pub async fn assistant_options(api: &dyn AssistantApi) -> Vec<AssistantOption> {
    match api.list_assistants(DEFAULT_ASSISTANT_LIST_LIMIT).await {
        Ok(assistants) => assistants
            .into_iter()
            .map(|assistant| AssistantOption {
                label: assistant.name,
                value: assistant.id,
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}
