//! Runtime wiring helpers for the HTTP-backed widget.

use std::sync::Arc;

use papi::{
    AssistantApi, CsrfTokenProvider, HttpAssistantApi, HttpTransport, ReqwestTransport,
    TokenProvider,
};
use pchat::{ConversationController, ConversationHooks};
use pobserve::{SafeConversationHooks, TracingObservabilityHooks};
use pview::PresentationAdapter;
use reqwest::Client;

use crate::{ConnectionConfig, VariableResolver, Widget, WidgetConfig, WidgetError};

#[derive(Clone)]
pub struct ApiBundle {
    pub transport: Arc<dyn HttpTransport>,
    pub tokens: Arc<dyn TokenProvider>,
    pub api: Arc<dyn AssistantApi>,
}

pub fn http_transport(connection: &ConnectionConfig) -> Result<Arc<dyn HttpTransport>, WidgetError> {
    connection.validate()?;

    let client = Client::builder()
        .timeout(connection.timeout)
        .build()
        .map_err(|err| WidgetError::transport(err.to_string()))?;

    Ok(Arc::new(
        ReqwestTransport::new(client, connection.base_url.trim()).with_auth(connection.auth.clone()),
    ))
}

pub fn api_bundle(transport: Arc<dyn HttpTransport>) -> ApiBundle {
    ApiBundle {
        tokens: Arc::new(CsrfTokenProvider::new(Arc::clone(&transport))),
        api: Arc::new(HttpAssistantApi::new(Arc::clone(&transport))),
        transport,
    }
}

pub fn default_hooks() -> Arc<dyn ConversationHooks> {
    Arc::new(SafeConversationHooks::new(TracingObservabilityHooks))
}

pub fn build_controller(connection: &ConnectionConfig) -> Result<ConversationController, WidgetError> {
    build_controller_with_hooks(connection, default_hooks())
}

pub fn build_controller_with_hooks(
    connection: &ConnectionConfig,
    hooks: Arc<dyn ConversationHooks>,
) -> Result<ConversationController, WidgetError> {
    let bundle = api_bundle(http_transport(connection)?);
    Ok(ConversationController::builder(bundle.api, bundle.tokens)
        .hooks(hooks)
        .build())
}

pub fn build_widget(
    connection: &ConnectionConfig,
    config: WidgetConfig,
    variables: Arc<dyn VariableResolver>,
    presenter: Arc<dyn PresentationAdapter>,
) -> Result<Widget, WidgetError> {
    config.validate()?;
    let controller = Arc::new(build_controller(connection)?);
    Widget::new(config, controller, variables, presenter)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pchat::SessionPhase;
    use pview::MinimalPresenter;

    use super::{build_controller, build_widget};
    use crate::{ConnectionConfig, StaticVariables, WidgetConfig, WidgetErrorKind};

    #[test]
    fn build_controller_starts_idle() {
        let controller = build_controller(&ConnectionConfig::new("https://tenant.example.com"))
            .expect("controller should build");
        assert_eq!(controller.phase(), SessionPhase::Idle);
    }

    #[test]
    fn build_widget_rejects_incomplete_configuration_before_connecting() {
        let error = build_widget(
            &ConnectionConfig::new("not a url"),
            WidgetConfig::new("assistant-1", ""),
            Arc::new(StaticVariables::new()),
            Arc::new(MinimalPresenter::new()),
        )
        .err()
        .expect("widget should not build");

        assert_eq!(error.kind, WidgetErrorKind::Configuration);
        assert_eq!(
            error.message,
            "Please configure both Assistant and Question Variable."
        );
    }

    #[test]
    fn build_widget_rejects_invalid_base_url() {
        let error = build_widget(
            &ConnectionConfig::new("tenant.example.com"),
            WidgetConfig::new("assistant-1", "vQuestion"),
            Arc::new(StaticVariables::new()),
            Arc::new(MinimalPresenter::new()),
        )
        .err()
        .expect("widget should not build");

        assert_eq!(error.kind, WidgetErrorKind::Configuration);
    }
}
