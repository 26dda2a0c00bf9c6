//! The embeddable widget: configuration, host variables, controller and
//! presenter bound together.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use pchat::{ConversationController, SessionSnapshot, StartOutcome, SubmitOutcome};
use pobserve::SafeSessionObserver;
use pview::{
    Intent, PresentationAdapter, PresenterObserver, SPINNER_INTERVAL, Spinner, ViewState,
    animate_while,
};

use crate::{VariableResolver, WidgetConfig, WidgetError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Started(StartOutcome),
    Submitted(SubmitOutcome),
    Reset,
}

pub struct Widget {
    config: WidgetConfig,
    controller: Arc<ConversationController>,
    variables: Arc<dyn VariableResolver>,
    presenter: Arc<dyn PresentationAdapter>,
    spinner: Spinner,
    spinner_interval: Duration,
}

impl Widget {
    /// Validates `config`, subscribes `presenter` to the controller and draws
    /// the initial view.
    pub fn new(
        config: WidgetConfig,
        controller: Arc<ConversationController>,
        variables: Arc<dyn VariableResolver>,
        presenter: Arc<dyn PresentationAdapter>,
    ) -> Result<Self, WidgetError> {
        config.validate()?;

        controller.add_observer(Arc::new(SafeSessionObserver::new(PresenterObserver::new(
            Arc::clone(&presenter),
        ))));

        let widget = Self {
            config,
            controller,
            variables,
            presenter,
            spinner: Spinner::default(),
            spinner_interval: SPINNER_INTERVAL,
        };
        widget.render();
        Ok(widget)
    }

    /// Replaces the loading animation shown while a request is in flight.
    pub fn with_spinner(mut self, spinner: Spinner, interval: Duration) -> Self {
        self.spinner = spinner;
        self.spinner_interval = interval;
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn controller(&self) -> &ConversationController {
        &self.controller
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.controller.snapshot()
    }

    /// Reads the configured source variable and starts an inquiry with it.
    ///
    /// A host failure leaves the session untouched but is still shown.
    pub async fn start_inquiry(&self) -> Result<StartOutcome, WidgetError> {
        let content = match self.variables.resolve(&self.config.source_variable).await {
            Ok(content) => content,
            Err(error) => {
                self.presenter.render(&ViewState {
                    error: Some(error.message.clone()),
                    ..ViewState::from(&self.controller.snapshot())
                });
                return Err(error);
            }
        };

        Ok(self
            .animated(self.controller.start(self.config.assistant(), &content.text()))
            .await?)
    }

    pub async fn dispatch(&self, intent: Intent) -> Result<DispatchOutcome, WidgetError> {
        match intent {
            Intent::Start(text) => {
                let outcome = self
                    .animated(self.controller.start(self.config.assistant(), &text))
                    .await?;
                Ok(DispatchOutcome::Started(outcome))
            }
            Intent::Submit(text) => {
                let outcome = self.animated(self.controller.submit(&text)).await?;
                Ok(DispatchOutcome::Submitted(outcome))
            }
            Intent::Reset => {
                self.controller.reset();
                Ok(DispatchOutcome::Reset)
            }
        }
    }

    async fn animated<F: Future>(&self, work: F) -> F::Output {
        animate_while(
            self.presenter.as_ref(),
            self.spinner.clone(),
            self.spinner_interval,
            work,
        )
        .await
    }

    /// Redraws the current session without changing it.
    pub fn render(&self) {
        self.presenter
            .render(&ViewState::from(&self.controller.snapshot()));
    }
}
