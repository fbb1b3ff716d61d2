use super::{
    catalog::{ModelChoice, Register},
    fsm::{FormEvent, FormPhase, FormStateMachine, TranslationResult},
    parser::ParseStrategy,
    prompt::build_prompt,
};
use crate::{
    Error, Result,
    ollama::{GenerateRequest, InferenceClient},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, error, info};
use uuid::Uuid;

/// User-editable inputs of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub input_text: String,
    pub source: Register,
    pub target: Register,
    pub model: ModelChoice,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            source: Register::default_source(),
            target: Register::default_target(),
            model: ModelChoice::default(),
        }
    }
}

impl FormFields {
    /// Input-level checks; in-flight and closed checks need the controller.
    pub fn validate(&self) -> std::result::Result<(), SubmitRejection> {
        if self.input_text.trim().is_empty() {
            return Err(SubmitRejection::EmptyInput);
        }
        if self.source == self.target {
            return Err(SubmitRejection::SameRegister);
        }
        Ok(())
    }
}

/// Why a submission never reached the network.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("input is empty")]
    EmptyInput,
    #[error("source and target are the same")]
    SameRegister,
    #[error("a translation is already in flight")]
    InFlight,
    #[error("form is closed")]
    Closed,
}

impl SubmitRejection {
    pub fn message(self) -> &'static str {
        match self {
            SubmitRejection::EmptyInput => "Enter a phrase to translate.",
            SubmitRejection::SameRegister => "Choose two different languages.",
            SubmitRejection::InFlight => "A translation is already in progress.",
            SubmitRejection::Closed => "This form has been closed.",
        }
    }
}

/// Read-only view of the form for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub fields: FormFields,
    #[serde(flatten)]
    pub phase: FormPhase,
    pub can_submit: bool,
}

struct FormInner {
    fields: FormFields,
    machine: FormStateMachine,
}

/// Owns the form state and runs one translation request at a time.
///
/// Closing the form (or dropping it) cancels the in-flight request; any
/// response that still arrives afterwards is discarded.
pub struct TranslationForm {
    client: Arc<dyn InferenceClient>,
    strategy: ParseStrategy,
    inner: Mutex<FormInner>,
    closed: watch::Sender<bool>,
}

impl TranslationForm {
    pub fn new(client: Arc<dyn InferenceClient>, strategy: ParseStrategy) -> Self {
        let (closed, _) = watch::channel(false);

        Self {
            client,
            strategy,
            inner: Mutex::new(FormInner {
                fields: FormFields::default(),
                machine: FormStateMachine::new(),
            }),
            closed,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.lock().fields.input_text = text.into();
    }

    pub fn set_source(&self, source: Register) {
        self.lock().fields.source = source;
    }

    pub fn set_target(&self, target: Register) {
        self.lock().fields.target = target;
    }

    pub fn set_model(&self, model: ModelChoice) {
        self.lock().fields.model = model;
    }

    pub fn set_fields(&self, fields: FormFields) {
        self.lock().fields = fields;
    }

    pub fn fields(&self) -> FormFields {
        self.lock().fields.clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.lock().machine.current_phase().clone()
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    pub fn can_submit(&self) -> bool {
        let inner = self.lock();
        self.check_submit(&inner).is_ok()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let inner = self.lock();
        FormSnapshot {
            fields: inner.fields.clone(),
            phase: inner.machine.current_phase().clone(),
            can_submit: self.check_submit(&inner).is_ok(),
        }
    }

    fn check_submit(&self, inner: &FormInner) -> std::result::Result<(), SubmitRejection> {
        if self.is_closed() {
            return Err(SubmitRejection::Closed);
        }
        if inner.machine.is_pending() {
            return Err(SubmitRejection::InFlight);
        }
        inner.fields.validate()
    }

    /// Runs one translation with the current fields.
    ///
    /// Rejected submissions never touch the network. Otherwise the form is
    /// pending until this call settles it, and it is settled on every exit
    /// path, including this future being dropped.
    pub async fn submit(&self) -> Result<TranslationResult> {
        let (submission, request) = self.begin()?;
        let mut guard = PendingGuard {
            form: self,
            submission,
            armed: true,
        };

        let outcome = self.run(request).await;
        guard.armed = false;

        match &outcome {
            Ok(result) => {
                info!("Submission {} translated successfully", submission);
                self.settle(submission, FormEvent::Resolve(result.clone()));
            }
            Err(Error::Cancelled) => {
                info!("Submission {} cancelled", submission);
                self.settle(submission, FormEvent::Cancel);
            }
            Err(e) => {
                error!("Submission {} failed: {}", submission, e);
                self.settle(
                    submission,
                    FormEvent::Reject {
                        message: e.user_message(),
                    },
                );
            }
        }

        outcome
    }

    fn begin(&self) -> Result<(Uuid, GenerateRequest)> {
        let mut inner = self.lock();
        if let Err(rejection) = self.check_submit(&inner) {
            debug!("Submission rejected: {}", rejection);
            return Err(rejection.into());
        }

        let submission = Uuid::new_v4();
        inner.machine.transition(FormEvent::Submit { submission })?;

        let fields = &inner.fields;
        let prompt = build_prompt(&fields.input_text, fields.source, fields.target);
        info!(
            "Submission {}: {} -> {} with {}",
            submission, fields.source, fields.target, fields.model
        );

        Ok((submission, GenerateRequest::new(fields.model.name(), prompt)))
    }

    async fn run(&self, request: GenerateRequest) -> Result<TranslationResult> {
        let mut closed = self.closed.subscribe();
        if *closed.borrow_and_update() {
            return Err(Error::Cancelled);
        }

        // The close signal only ever flips to true.
        let envelope = tokio::select! {
            envelope = self.client.generate(request) => envelope?,
            _ = closed.changed() => return Err(Error::Cancelled),
        };

        let completion = envelope.into_completion()?;
        let translation = self.strategy.parse(&completion.text)?;

        Ok(TranslationResult::new(translation, &completion))
    }

    /// Applies `event` only if `submission` is still the pending one.
    fn settle(&self, submission: Uuid, event: FormEvent) {
        let mut inner = self.lock();
        if !inner.machine.is_pending_for(submission) {
            debug!("Discarding late outcome for submission {}", submission);
            return;
        }
        if let Err(e) = inner.machine.transition(event) {
            error!("Failed to settle submission {}: {}", submission, e);
        }
    }

    /// Cancels any in-flight request and rejects further submissions.
    pub fn close(&self) {
        if self.closed.send_replace(true) {
            return;
        }

        let mut inner = self.lock();
        if inner.machine.is_pending() {
            if let Err(e) = inner.machine.transition(FormEvent::Cancel) {
                error!("Failed to cancel pending submission: {}", e);
            }
        }
        debug!("Translation form closed");
    }
}

impl Drop for TranslationForm {
    fn drop(&mut self) {
        self.close();
    }
}

struct PendingGuard<'a> {
    form: &'a TranslationForm,
    submission: Uuid,
    armed: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("Submission {} dropped while pending", self.submission);
            self.form.settle(self.submission, FormEvent::Cancel);
        }
    }
}
