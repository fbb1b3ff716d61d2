use super::{
    page::IndexTemplate,
    types::{ErrorResponse, FormSubmission, OptionsResponse, TranslateRequest, TranslateResponse},
};
use crate::{
    Error,
    ollama::InferenceClient,
    translation::{FormFields, FormSnapshot, ParseStrategy, SubmitRejection, TranslationForm},
};
use askama::Template;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    /// Backs the HTML page; lives as long as the server.
    pub form: Arc<TranslationForm>,
    pub client: Arc<dyn InferenceClient>,
    pub strategy: ParseStrategy,
}

impl AppState {
    pub fn new(client: Arc<dyn InferenceClient>, strategy: ParseStrategy) -> Self {
        Self {
            form: Arc::new(TranslationForm::new(client.clone(), strategy)),
            client,
            strategy,
        }
    }
}

pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Rejected(SubmitRejection::EmptyInput | SubmitRejection::SameRegister) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Error::Rejected(SubmitRejection::InFlight) => StatusCode::CONFLICT,
        Error::Rejected(SubmitRejection::Closed) | Error::Cancelled => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        Error::Connection(_)
        | Error::HttpStatus { .. }
        | Error::InvalidResponse(_)
        | Error::Parse(_)
        | Error::Network(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        status_for(error),
        Json(ErrorResponse {
            error: error.user_message(),
        }),
    )
}

fn render(template: IndexTemplate) -> Result<Html<String>, (StatusCode, Html<String>)> {
    template.render().map(Html).map_err(|e| {
        error!("Failed to render page: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("Internal Server Error".to_string()),
        )
    })
}

pub async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    render(IndexTemplate::from_snapshot(state.form.snapshot(), None))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Result<(StatusCode, Html<String>), (StatusCode, Html<String>)> {
    info!(
        "Received form submission: {} -> {}",
        submission.source, submission.target
    );

    state.form.set_fields(FormFields {
        input_text: submission.text,
        source: submission.source,
        target: submission.target,
        model: submission.model,
    });

    let (status, notice) = match state.form.submit().await {
        Ok(_) => (StatusCode::OK, None),
        Err(e @ Error::Rejected(_)) => (status_for(&e), Some(e.user_message())),
        // Failures are already part of the form phase.
        Err(e) => (status_for(&e), None),
    };

    let page = render(IndexTemplate::from_snapshot(state.form.snapshot(), notice))?;
    Ok((status, page))
}

pub async fn form_state(State(state): State<AppState>) -> Json<FormSnapshot> {
    Json(state.form.snapshot())
}

pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse::default())
}

/// Translates with a form scoped to this request: if the caller goes away the
/// form is dropped and the upstream call with it.
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Received translate request: {} -> {}",
        request.source, request.target
    );

    let form = TranslationForm::new(state.client.clone(), state.strategy);
    form.set_fields(FormFields {
        input_text: request.text,
        source: request.source,
        target: request.target,
        model: request.model.unwrap_or_default(),
    });

    match form.submit().await {
        Ok(result) => Ok(Json(result.into())),
        Err(e) => {
            error!("Translate request failed: {}", e);
            Err(error_response(&e))
        }
    }
}
