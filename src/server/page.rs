use crate::translation::{FormPhase, FormSnapshot, ModelChoice, Register, SubmitRejection};
use askama::Template;

pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

pub struct ResultView {
    pub translation: String,
    pub context: String,
    pub model: Option<String>,
    pub duration: Option<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub input_text: String,
    pub sources: Vec<SelectOption>,
    pub targets: Vec<SelectOption>,
    pub models: Vec<SelectOption>,
    pub pending: bool,
    pub can_submit: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

fn register_options(selected: Register) -> Vec<SelectOption> {
    Register::ALL
        .iter()
        .map(|register| SelectOption {
            value: register.label(),
            selected: *register == selected,
        })
        .collect()
}

impl IndexTemplate {
    /// `notice` carries a rejected submission's message; it is not part of the
    /// form phase. Without one, a same-register selection is flagged before
    /// any submit.
    pub fn from_snapshot(snapshot: FormSnapshot, notice: Option<String>) -> Self {
        let fields = snapshot.fields;
        let notice = notice.or_else(|| match fields.validate() {
            Err(SubmitRejection::SameRegister)
                if !matches!(snapshot.phase, FormPhase::Pending { .. }) =>
            {
                Some(SubmitRejection::SameRegister.message().to_string())
            }
            _ => None,
        });
        let models = ModelChoice::ALL
            .iter()
            .map(|model| SelectOption {
                value: model.name(),
                selected: *model == fields.model,
            })
            .collect();

        let (pending, error, result) = match snapshot.phase {
            FormPhase::Idle => (false, None, None),
            FormPhase::Pending { .. } => (true, None, None),
            FormPhase::Failed { message } => (false, Some(message), None),
            FormPhase::Succeeded { result } => (
                false,
                None,
                Some(ResultView {
                    translation: result.translation,
                    context: result.context,
                    model: result.model,
                    duration: result.duration_secs.map(|secs| format!("{:.2}s", secs)),
                }),
            ),
        };

        Self {
            input_text: fields.input_text,
            sources: register_options(fields.source),
            targets: register_options(fields.target),
            models,
            pending,
            can_submit: snapshot.can_submit,
            notice,
            error,
            result,
        }
    }
}
