use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::cors;
use crate::error::AppError;
use crate::form::config::FormConfig;
use crate::models::{SubmissionRequest, SubmissionResponse};
use crate::state::{AppState, Forms, SharedState};
use crate::submission::{pipeline, validate};

#[derive(Debug, Clone, Copy)]
pub enum FormKind {
    Contact,
    Careers,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Careers => "careers",
        }
    }

    fn config<'a>(&self, forms: &'a Forms) -> &'a FormConfig {
        match self {
            FormKind::Contact => &forms.contact,
            FormKind::Careers => &forms.careers,
        }
    }
}

pub async fn submit_contact(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    submit(state, FormKind::Contact, headers, body).await
}

pub async fn submit_careers(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    submit(state, FormKind::Careers, headers, body).await
}

/// CORS preflight. Answered for every form endpoint with the computed
/// allow headers.
pub async fn preflight(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    attach_cors(&state, &headers, &mut response);
    response
}

async fn submit(state: SharedState, kind: FormKind, headers: HeaderMap, body: Bytes) -> Response {
    let mut response = match process(&state, kind, &body).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    };
    // Every response carries the CORS headers, errors included.
    attach_cors(&state, &headers, &mut response);
    response
}

async fn process(
    state: &AppState,
    kind: FormKind,
    body: &Bytes,
) -> Result<SubmissionResponse, AppError> {
    let request: SubmissionRequest = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

    let config = kind.config(&state.forms);

    // Authoritative validation; nothing is persisted on failure.
    let errors = validate::validate(config, &request);
    if !errors.is_empty() {
        return Err(AppError::Validation(validate::messages(&errors)));
    }

    let outcome = pipeline::run(state, kind.as_str(), config, &request).await;

    Ok(SubmissionResponse {
        success: true,
        message: "Submission received".to_string(),
        application_id: outcome.application_id,
        saved_to_db: outcome.saved_to_db,
        email_sent: outcome.email_sent,
    })
}

fn attach_cors(state: &AppState, headers: &HeaderMap, response: &mut Response) {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());
    let cors = cors::response_headers(origin, &state.config.allowed_origins);
    response.headers_mut().extend(cors);
}
