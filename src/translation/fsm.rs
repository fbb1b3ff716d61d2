use super::parser::Translation;
use crate::{Error, Result, ollama::Completion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A parsed translation together with the envelope metadata it came with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
    pub context: String,
    pub model: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub duration_secs: Option<f64>,
}

impl TranslationResult {
    pub fn new(translation: Translation, completion: &Completion) -> Self {
        Self {
            translation: translation.translation,
            context: translation.context,
            model: completion.model.clone(),
            created_at: completion.created_at,
            duration_secs: completion.duration_secs(),
        }
    }
}

// Form phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Pending { submission: Uuid },
    Succeeded { result: TranslationResult },
    Failed { message: String },
}

impl FormPhase {
    fn name(&self) -> &'static str {
        match self {
            FormPhase::Idle => "Idle",
            FormPhase::Pending { .. } => "Pending",
            FormPhase::Succeeded { .. } => "Succeeded",
            FormPhase::Failed { .. } => "Failed",
        }
    }
}

// Form events
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit { submission: Uuid },
    Resolve(TranslationResult),
    Reject { message: String },
    Cancel,
}

impl FormEvent {
    fn name(&self) -> &'static str {
        match self {
            FormEvent::Submit { .. } => "Submit",
            FormEvent::Resolve(_) => "Resolve",
            FormEvent::Reject { .. } => "Reject",
            FormEvent::Cancel => "Cancel",
        }
    }
}

pub struct FormStateMachine {
    phase: FormPhase,
}

impl Default for FormStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStateMachine {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Idle,
        }
    }

    pub fn current_phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, FormPhase::Pending { .. })
    }

    /// Whether `submission` is the one currently awaiting its response.
    pub fn is_pending_for(&self, submission: Uuid) -> bool {
        matches!(self.phase, FormPhase::Pending { submission: current } if current == submission)
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self.phase,
            FormPhase::Succeeded { .. } | FormPhase::Failed { .. }
        )
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        match &self.phase {
            FormPhase::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: FormEvent) -> Result<()> {
        debug!(
            "🔄 FSM processing event {} in phase {}",
            event.name(),
            self.phase.name()
        );

        let new_phase = match (&self.phase, event) {
            (
                FormPhase::Idle | FormPhase::Succeeded { .. } | FormPhase::Failed { .. },
                FormEvent::Submit { submission },
            ) => FormPhase::Pending { submission },
            (FormPhase::Pending { .. }, FormEvent::Resolve(result)) => {
                FormPhase::Succeeded { result }
            }
            (FormPhase::Pending { .. }, FormEvent::Reject { message }) => {
                FormPhase::Failed { message }
            }
            (FormPhase::Pending { .. }, FormEvent::Cancel) => FormPhase::Idle,
            (_, event) => {
                warn!(
                    "❌ Invalid FSM transition from {} with event {}",
                    self.phase.name(),
                    event.name()
                );
                return Err(Error::InvalidTransition {
                    current: self.phase.name().to_string(),
                    requested: event.name().to_string(),
                });
            }
        };

        info!(
            "🎯 FSM phase transition: {} -> {}",
            self.phase.name(),
            new_phase.name()
        );

        self.phase = new_phase;
        Ok(())
    }
}
