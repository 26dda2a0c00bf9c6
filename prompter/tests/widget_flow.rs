use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_timer::Delay;

use prompter::papi::{ASSISTANTS_PATH, CSRF_TOKEN_PATH};
use prompter::prelude::*;
use prompter::{
    ApiError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, api_bundle, assistant_options,
};

/// Routes by path; everything not scripted answers 404.
#[derive(Debug, Default)]
struct ScriptedTenant {
    requests: Mutex<Vec<HttpRequest>>,
    routes: Mutex<VecDeque<(String, HttpResponse)>>,
    invoke_delay: Duration,
}

impl ScriptedTenant {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn with_invoke_delay(invoke_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            invoke_delay,
            ..Self::default()
        })
    }

    fn respond(self: &Arc<Self>, suffix: &str, response: HttpResponse) -> Arc<Self> {
        self.routes
            .lock()
            .expect("routes lock")
            .push_back((suffix.to_string(), response));
        Arc::clone(self)
    }

    fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("requests lock")
            .iter()
            .map(|request| request.path.clone())
            .collect()
    }
}

impl HttpTransport for ScriptedTenant {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, ApiError>> {
        Box::pin(async move {
            let path = request.path.clone();
            self.requests.lock().expect("requests lock").push(request);

            if path == CSRF_TOKEN_PATH {
                return Ok(HttpResponse::new(200, "").with_header("qlik-csrf-token", "tok"));
            }
            if path.ends_with("/actions/invoke") && !self.invoke_delay.is_zero() {
                Delay::new(self.invoke_delay).await;
            }

            let mut routes = self.routes.lock().expect("routes lock");
            let position = routes.iter().position(|(suffix, _)| path.ends_with(suffix));
            Ok(position
                .and_then(|index| routes.remove(index))
                .map(|(_, response)| response)
                .unwrap_or_else(|| HttpResponse::new(404, "not found")))
        })
    }
}

struct FailingVariables;

impl VariableResolver for FailingVariables {
    fn resolve<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<VariableContent, WidgetError>> {
        Box::pin(async move { Err(WidgetError::host(format!("cannot read {name}"))) })
    }

    fn variable_names<'a>(&'a self) -> BoxFuture<'a, Result<Vec<String>, WidgetError>> {
        Box::pin(async { Err(WidgetError::host("variable list unavailable")) })
    }
}

/// Keeps every spinner frame shown while drawing through a transcript.
struct SpinnerLog {
    inner: Arc<TranscriptPresenter>,
    frames: Mutex<Vec<String>>,
}

impl PresentationAdapter for SpinnerLog {
    fn render(&self, view: &ViewState) {
        self.inner.render(view);
    }

    fn show_spinner(&self, frame: &str) {
        self.frames.lock().expect("frames lock").push(frame.to_string());
        self.inner.show_spinner(frame);
    }
}

fn widget_over(
    tenant: Arc<ScriptedTenant>,
    variables: Arc<dyn VariableResolver>,
) -> (Widget, Arc<TranscriptPresenter>) {
    let bundle = api_bundle(tenant);
    let controller = Arc::new(ConversationController::new(bundle.api, bundle.tokens));
    let presenter = Arc::new(TranscriptPresenter::new());
    let widget = Widget::new(
        WidgetConfig::new("assistant-1", "vQuestion"),
        controller,
        variables,
        presenter.clone(),
    )
    .expect("widget should build");

    (widget, presenter)
}

#[tokio::test]
async fn start_inquiry_sends_configured_variable_as_first_prompt() {
    let tenant = ScriptedTenant::new()
        .respond("/threads", HttpResponse::new(200, r#"{"id":"thread-9"}"#))
        .respond("/actions/invoke", HttpResponse::new(200, r#"{"output":"EMEA"}"#));
    let variables = Arc::new(static_variables! { "vQuestion" => "Which region grew?" });
    let (widget, presenter) = widget_over(tenant.clone(), variables);

    let outcome = widget.start_inquiry().await.expect("start");

    assert_eq!(
        outcome,
        StartOutcome::Started {
            thread: "thread-9".into(),
            reply: "EMEA".to_string(),
        }
    );
    assert_eq!(
        tenant.paths(),
        vec![
            "/api/v1/csrf-token",
            "/api/v1/assistants/assistant-1/threads",
            "/api/v1/csrf-token",
            "/api/v1/assistants/assistant-1/threads/thread-9/actions/invoke",
        ]
    );
    assert!(presenter.frame().contains(&"You: Which region grew?".to_string()));
    assert!(presenter.frame().contains(&"Assistant: EMEA".to_string()));
}

#[tokio::test]
async fn empty_variable_reports_error_without_network() {
    let tenant = ScriptedTenant::new();
    let variables = Arc::new(StaticVariables::new());
    let (widget, presenter) = widget_over(tenant.clone(), variables);

    let error = widget.start_inquiry().await.expect_err("empty variable");

    assert_eq!(error.kind, WidgetErrorKind::Chat(ChatErrorKind::EmptyInput));
    assert_eq!(error.message, "Variable is empty");
    assert!(tenant.paths().is_empty());
    assert_eq!(widget.snapshot().phase, SessionPhase::Idle);
    assert_eq!(
        presenter.frame().last().map(String::as_str),
        Some("Error: Variable is empty")
    );
}

#[tokio::test]
async fn host_failure_surfaces_as_host_error() {
    let tenant = ScriptedTenant::new();
    let (widget, presenter) = widget_over(tenant.clone(), Arc::new(FailingVariables));

    let error = widget.start_inquiry().await.expect_err("host failure");

    assert_eq!(error.kind, WidgetErrorKind::Host);
    assert!(tenant.paths().is_empty());
    assert_eq!(widget.snapshot().phase, SessionPhase::Idle);
    assert_eq!(
        presenter.frame().last().map(String::as_str),
        Some("Error: cannot read vQuestion")
    );
}

#[tokio::test]
async fn remote_failure_keeps_its_chat_kind() {
    let tenant = ScriptedTenant::new().respond("/threads", HttpResponse::new(503, "busy"));
    let (widget, _presenter) = widget_over(tenant, Arc::new(StaticVariables::new()));

    let error = widget
        .dispatch(Intent::Start("opening".to_string()))
        .await
        .expect_err("thread creation fails");

    assert_eq!(error.kind, WidgetErrorKind::Chat(ChatErrorKind::Remote));
    assert_eq!(error.message, "busy");
}

#[tokio::test]
async fn spinner_runs_while_reply_is_pending_and_stops_after() {
    let tenant = ScriptedTenant::with_invoke_delay(Duration::from_millis(80))
        .respond("/threads", HttpResponse::new(200, r#"{"id":"t-1"}"#))
        .respond("/actions/invoke", HttpResponse::new(200, r#"{"output":"done"}"#));
    let bundle = api_bundle(tenant);
    let controller = Arc::new(ConversationController::new(bundle.api, bundle.tokens));
    let presenter = Arc::new(TranscriptPresenter::new());
    let log = Arc::new(SpinnerLog {
        inner: presenter.clone(),
        frames: Mutex::new(Vec::new()),
    });
    let widget = Widget::new(
        WidgetConfig::new("assistant-1", "vQuestion"),
        controller,
        Arc::new(StaticVariables::new()),
        log.clone(),
    )
    .expect("widget should build")
    .with_spinner(Spinner::default(), Duration::from_millis(5));

    widget
        .dispatch(Intent::Start("opening".to_string()))
        .await
        .expect("start");

    let shown = log.frames.lock().expect("frames lock").clone();
    assert!(shown.len() >= 3);
    assert_eq!(&shown[..3], ["Thinking", "Thinking.", "Thinking.."]);
    assert!(presenter.frame().contains(&"Assistant: done".to_string()));
    assert!(presenter.frame().iter().all(|line| !line.starts_with("Thinking")));

    Delay::new(Duration::from_millis(30)).await;
    assert_eq!(log.frames.lock().expect("frames lock").len(), shown.len());
}

#[tokio::test]
async fn dispatch_forwards_submit_and_reset() {
    let tenant = ScriptedTenant::new()
        .respond("/threads", HttpResponse::new(200, r#"{"data":{"id":"t-1"}}"#))
        .respond("/actions/invoke", HttpResponse::new(200, r#"{"output":"first"}"#))
        .respond(
            "/actions/invoke",
            HttpResponse::new(200, r#"{"data":{"output":"second"}}"#),
        );
    let (widget, presenter) = widget_over(tenant, Arc::new(StaticVariables::new()));

    let started = widget
        .dispatch(Intent::Start("opening".to_string()))
        .await
        .expect("start");
    assert!(matches!(
        started,
        DispatchOutcome::Started(StartOutcome::Started { .. })
    ));

    let submitted = widget
        .dispatch(Intent::Submit("follow-up".to_string()))
        .await
        .expect("submit");
    assert_eq!(
        submitted,
        DispatchOutcome::Submitted(SubmitOutcome::Answered {
            reply: "second".to_string()
        })
    );
    assert_eq!(widget.snapshot().turns.len(), 2);

    let reset = widget.dispatch(Intent::Reset).await.expect("reset");
    assert_eq!(reset, DispatchOutcome::Reset);
    assert!(widget.snapshot().is_idle());
    assert_eq!(presenter.frame()[0], "[Start inquiry]");
}

#[tokio::test]
async fn widget_rejects_missing_configuration() {
    let bundle = api_bundle(ScriptedTenant::new());
    let controller = Arc::new(ConversationController::new(bundle.api, bundle.tokens));

    let error = Widget::new(
        WidgetConfig::new("assistant-1", ""),
        controller,
        Arc::new(StaticVariables::new()),
        Arc::new(MinimalPresenter::new()),
    )
    .err()
    .expect("config should be rejected");

    assert_eq!(error.kind, WidgetErrorKind::Configuration);
    assert_eq!(error.message, prompter::MISSING_CONFIGURATION_MESSAGE);
}

#[tokio::test]
async fn assistant_options_map_ids_and_names() {
    let tenant = ScriptedTenant::new().respond(
        &format!("{ASSISTANTS_PATH}?limit=100"),
        HttpResponse::new(
            200,
            r#"{"data":[{"id":"a-1","name":"Sales"},{"id":"a-2","name":"Ops"}]}"#,
        ),
    );
    let bundle = api_bundle(tenant.clone());

    let options = assistant_options(bundle.api.as_ref()).await;

    assert_eq!(
        options
            .iter()
            .map(|option| (option.value.as_str(), option.label.as_str()))
            .collect::<Vec<_>>(),
        vec![("a-1", "Sales"), ("a-2", "Ops")]
    );
    assert_eq!(tenant.paths(), vec!["/api/v1/assistants?limit=100"]);
}

#[tokio::test]
async fn assistant_options_degrade_to_empty_on_failure() {
    let bundle = api_bundle(ScriptedTenant::new());
    assert!(assistant_options(bundle.api.as_ref()).await.is_empty());
}
