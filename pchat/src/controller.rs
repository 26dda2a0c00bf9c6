//! Conversation controller: session state machine over the assistant API.
//!
//! The controller owns one [`Session`]. Every mutation happens under a short
//! synchronous lock that is released before any remote call, and observers
//! are notified with a snapshot after each change. A session epoch advances
//! on every start and reset; results issued under an older epoch are dropped.
//! Every published snapshot carries a strictly increasing revision.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use papi::{ApiError, AssistantApi, TokenProvider};
use pcommon::{AssistantId, BoxFuture, ThreadId};

use crate::{
    ActiveThread, ChatError, ConversationHooks, DEFAULT_PLACEHOLDER, IgnoreReason,
    NoopConversationHooks, RemoteOperation, ReplyPolicy, SessionObserver, SessionPhase,
    SessionSnapshot, StartOutcome, SubmitOutcome, ThreadNamer, TimestampThreadNamer, Turn,
};

#[derive(Debug, Default)]
struct Session {
    thread: Option<ActiveThread>,
    turns: Vec<Turn>,
    starting: bool,
    epoch: u64,
    revision: u64,
    last_error: Option<ChatError>,
}

impl Session {
    fn phase(&self) -> SessionPhase {
        if self.starting {
            SessionPhase::Starting
        } else if self.thread.is_none() {
            SessionPhase::Idle
        } else if self.turns.iter().any(Turn::is_pending) {
            SessionPhase::AwaitingReply
        } else {
            SessionPhase::Ready
        }
    }

    fn is_current(&self, epoch: u64, thread: &ThreadId) -> bool {
        self.epoch == epoch
            && self
                .thread
                .as_ref()
                .is_some_and(|active| &active.thread == thread)
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            revision: self.revision,
            phase: self.phase(),
            thread: self.thread.clone(),
            turns: self.turns.clone(),
            last_error: self.last_error.clone(),
        }
    }
}

enum Exchange {
    Answered(String),
    Discarded,
}

pub struct ConversationController {
    api: Arc<dyn AssistantApi>,
    tokens: Arc<dyn TokenProvider>,
    hooks: Arc<dyn ConversationHooks>,
    namer: Arc<dyn ThreadNamer>,
    placeholder: String,
    reply_policy: ReplyPolicy,
    observers: Mutex<Vec<Arc<dyn SessionObserver>>>,
    session: Mutex<Session>,
}

impl ConversationController {
    pub fn new(api: Arc<dyn AssistantApi>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::builder(api, tokens).build()
    }

    pub fn builder(
        api: Arc<dyn AssistantApi>,
        tokens: Arc<dyn TokenProvider>,
    ) -> ConversationControllerBuilder {
        ConversationControllerBuilder::new(api, tokens)
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn add_observer(&self, observer: Arc<dyn SessionObserver>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock().phase()
    }

    /// Creates a thread on `assistant` and runs the first turn with
    /// `source_text`.
    pub async fn start(
        &self,
        assistant: AssistantId,
        source_text: &str,
    ) -> Result<StartOutcome, ChatError> {
        let text = source_text.trim();
        let epoch = self.begin_start(&assistant, text)?;
        self.publish();

        let created = self.create_thread(&assistant).await;
        let active = match self.finish_start(epoch, assistant, text, created) {
            Ok(Some(active)) => active,
            Ok(None) => {
                self.hooks.on_stale_result(RemoteOperation::CreateThread);
                return Ok(StartOutcome::Discarded);
            }
            Err(error) => {
                self.publish();
                return Err(error);
            }
        };

        self.hooks.on_thread_created(&active.thread);
        self.publish();

        match self.exchange(epoch, &active, text).await? {
            Exchange::Answered(reply) => Ok(StartOutcome::Started {
                thread: active.thread,
                reply,
            }),
            Exchange::Discarded => Ok(StartOutcome::Discarded),
        }
    }

    /// Sends a follow-up turn on the active thread.
    ///
    /// Ignored without an active thread, while a start or turn is in flight,
    /// or when `text` is blank.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, ChatError> {
        let text = text.trim();
        let (epoch, active) = match self.begin_submit(text) {
            Ok(accepted) => accepted,
            Err(reason) => {
                self.hooks.on_input_ignored(reason);
                return Ok(SubmitOutcome::Ignored(reason));
            }
        };
        self.publish();

        match self.exchange(epoch, &active, text).await? {
            Exchange::Answered(reply) => Ok(SubmitOutcome::Answered { reply }),
            Exchange::Discarded => Ok(SubmitOutcome::Discarded),
        }
    }

    /// Returns to idle. In-flight results for the old session are discarded
    /// when they arrive.
    pub fn reset(&self) {
        {
            let mut session = self.lock();
            let epoch = session.epoch.wrapping_add(1);
            let revision = session.revision;
            *session = Session {
                epoch,
                revision,
                ..Session::default()
            };
        }

        self.hooks.on_session_reset();
        self.publish();
    }

    fn begin_start(&self, assistant: &AssistantId, text: &str) -> Result<u64, ChatError> {
        let rejected = {
            let mut session = self.lock();
            let phase = session.phase();
            if phase != SessionPhase::Idle {
                return Err(ChatError::invalid_request(format!(
                    "cannot start an inquiry while the session is {phase}"
                )));
            }

            let error = if assistant.is_blank() {
                Some(ChatError::invalid_request("assistant id must not be empty"))
            } else if text.is_empty() {
                Some(ChatError::empty_input("Variable is empty"))
            } else {
                None
            };

            match error {
                Some(error) => {
                    session.last_error = Some(error.clone());
                    error
                }
                None => {
                    session.epoch = session.epoch.wrapping_add(1);
                    session.starting = true;
                    session.turns.clear();
                    session.last_error = None;
                    return Ok(session.epoch);
                }
            }
        };

        self.hooks.on_input_rejected(&rejected);
        self.publish();
        Err(rejected)
    }

    fn finish_start(
        &self,
        epoch: u64,
        assistant: AssistantId,
        text: &str,
        created: Result<ThreadId, ChatError>,
    ) -> Result<Option<ActiveThread>, ChatError> {
        let mut session = self.lock();
        if session.epoch != epoch {
            return Ok(None);
        }

        session.starting = false;
        let thread = match created {
            Ok(thread) => thread,
            Err(error) => {
                session.last_error = Some(error.clone());
                return Err(error);
            }
        };

        let active = ActiveThread { assistant, thread };
        session.thread = Some(active.clone());
        session.turns.clear();
        session.turns.push(Turn::pending(text, self.placeholder.as_str()));
        Ok(Some(active))
    }

    fn begin_submit(&self, text: &str) -> Result<(u64, ActiveThread), IgnoreReason> {
        let mut session = self.lock();
        let active = match (&session.thread, session.phase()) {
            (None, _) => return Err(IgnoreReason::NoActiveThread),
            (Some(_), phase) if phase.is_busy() => return Err(IgnoreReason::TurnInFlight),
            (Some(active), _) => active.clone(),
        };

        if text.is_empty() {
            return Err(IgnoreReason::BlankInput);
        }

        session.turns.push(Turn::pending(text, self.placeholder.as_str()));
        session.last_error = None;
        Ok((session.epoch, active))
    }

    async fn exchange(
        &self,
        epoch: u64,
        active: &ActiveThread,
        text: &str,
    ) -> Result<Exchange, ChatError> {
        let outcome = self.invoke(active, text).await;
        if !self.apply_reply(epoch, &active.thread, &outcome) {
            self.hooks.on_stale_result(RemoteOperation::Invoke);
            return Ok(Exchange::Discarded);
        }

        self.publish();
        outcome.map(Exchange::Answered)
    }

    fn apply_reply(
        &self,
        epoch: u64,
        thread: &ThreadId,
        outcome: &Result<String, ChatError>,
    ) -> bool {
        let mut guard = self.lock();
        if !guard.is_current(epoch, thread) {
            return false;
        }

        let session = &mut *guard;
        let Some(turn) = session.turns.iter_mut().rev().find(|turn| turn.is_pending()) else {
            return false;
        };

        match outcome {
            Ok(reply) => {
                turn.answer(reply.as_str());
            }
            Err(error) => {
                turn.fail();
                session.last_error = Some(error.clone());
            }
        }

        true
    }

    async fn create_thread(&self, assistant: &AssistantId) -> Result<ThreadId, ChatError> {
        let token = self
            .observe(RemoteOperation::AcquireToken, self.tokens.acquire())
            .await?;
        let name = self.namer.next_name();

        self.observe(
            RemoteOperation::CreateThread,
            self.api.create_thread(assistant, &name, &token),
        )
        .await
    }

    async fn invoke(&self, active: &ActiveThread, text: &str) -> Result<String, ChatError> {
        let token = self
            .observe(RemoteOperation::AcquireToken, self.tokens.acquire())
            .await?;
        let strict = self.reply_policy == ReplyPolicy::Strict;
        let reply = self
            .observe_checked(
                RemoteOperation::Invoke,
                self.api
                    .invoke(&active.assistant, &active.thread, text, &token),
                |reply| {
                    if strict && !reply.has_output() {
                        Err(ChatError::remote(
                            "malformed response: invoke reply carries no output",
                            None,
                        ))
                    } else {
                        Ok(())
                    }
                },
            )
            .await?;

        Ok(reply.text)
    }

    async fn observe<T>(
        &self,
        operation: RemoteOperation,
        request: BoxFuture<'_, Result<T, ApiError>>,
    ) -> Result<T, ChatError> {
        self.observe_checked(operation, request, |_| Ok(())).await
    }

    /// Runs `request` between the start and success/failure hooks. `check`
    /// can still reject a successful response before the success hook fires.
    async fn observe_checked<T, C>(
        &self,
        operation: RemoteOperation,
        request: BoxFuture<'_, Result<T, ApiError>>,
        check: C,
    ) -> Result<T, ChatError>
    where
        C: FnOnce(&T) -> Result<(), ChatError>,
    {
        self.hooks.on_request_start(operation);
        let started = Instant::now();

        let outcome = request
            .await
            .map_err(ChatError::from)
            .and_then(|value| check(&value).map(|()| value));

        match &outcome {
            Ok(_) => self.hooks.on_request_success(operation, started.elapsed()),
            Err(error) => self
                .hooks
                .on_request_failure(operation, error, started.elapsed()),
        }

        outcome
    }

    /// Stamps the current state with the next revision and hands it to every
    /// observer. Deliveries may interleave across threads; observers use the
    /// revision to drop snapshots older than one they already applied.
    fn publish(&self) {
        let snapshot = {
            let mut session = self.lock();
            session.revision = session.revision.wrapping_add(1);
            session.snapshot()
        };
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for observer in observers {
            observer.on_session_changed(&snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct ConversationControllerBuilder {
    api: Arc<dyn AssistantApi>,
    tokens: Arc<dyn TokenProvider>,
    hooks: Arc<dyn ConversationHooks>,
    namer: Arc<dyn ThreadNamer>,
    placeholder: String,
    reply_policy: ReplyPolicy,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl ConversationControllerBuilder {
    pub fn new(api: Arc<dyn AssistantApi>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            api,
            tokens,
            hooks: Arc::new(NoopConversationHooks),
            namer: Arc::new(TimestampThreadNamer::default()),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            reply_policy: ReplyPolicy::default(),
            observers: Vec::new(),
        }
    }

    pub fn hooks(mut self, hooks: Arc<dyn ConversationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn thread_namer(mut self, namer: Arc<dyn ThreadNamer>) -> Self {
        self.namer = namer;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn reply_policy(mut self, reply_policy: ReplyPolicy) -> Self {
        self.reply_policy = reply_policy;
        self
    }

    pub fn observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn build(self) -> ConversationController {
        ConversationController {
            api: self.api,
            tokens: self.tokens,
            hooks: self.hooks,
            namer: self.namer,
            placeholder: self.placeholder,
            reply_policy: self.reply_policy,
            observers: Mutex::new(self.observers),
            session: Mutex::new(Session::default()),
        }
    }
}
