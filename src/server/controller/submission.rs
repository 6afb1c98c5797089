use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::submission::SubmissionResponseDto,
    server::{
        error::submission::SubmissionError,
        model::{
            form::{FormDescriptor, FIBER_WORKSHOP, HACKATHON_TEAM, INSCRIPTION, QUANTUM_WORKSHOP},
            payload::FormPayload,
        },
        service::submission::SubmissionService,
        state::AppState,
    },
};

/// Tag for grouping submission endpoints in OpenAPI documentation
pub static SUBMISSION_TAG: &str = "submission";

/// Extracts the submitted fields from a url-encoded or JSON body.
///
/// A body that cannot be read, or that claims to be JSON but is not, is answered with the
/// generic internal error rather than a validation message.
impl<S: Send + Sync> FromRequest<S> for FormPayload {
    type Rejection = SubmissionError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| SubmissionError::Internal(format!("Failed to read body: {}", e)))?;

        FormPayload::decode(&content_type, &body)
            .map_err(|e| SubmissionError::Internal(format!("Malformed JSON body: {}", e)))
    }
}

async fn submit(
    state: &AppState,
    form: &FormDescriptor,
    payload: FormPayload,
) -> Result<impl IntoResponse, SubmissionError> {
    let stored = SubmissionService::new(state.gateway.as_ref())
        .submit(form, &payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SubmissionResponseDto::stored(stored.id, stored.message)),
    ))
}

/// Submit a general event registration.
///
/// Accepts `application/x-www-form-urlencoded` or JSON. Required fields are `nome`, `email`,
/// `telefone`, `faculdade`, `curso` and `ingresso`.
///
/// # Returns
/// - `200 OK` - Registration stored, with its id
/// - `400 Bad Request` - No data, missing fields, spam, or a field the store rejected
/// - `403 Forbidden` - Store access policy refused the write
/// - `409 Conflict` - Registration already exists
/// - `500 Internal Server Error` - Store failure or no row returned
#[utoipa::path(
    post,
    path = "/api/inscricao",
    tag = SUBMISSION_TAG,
    responses(
        (status = 200, description = "Registration stored", body = SubmissionResponseDto),
        (status = 400, description = "Validation failed", body = SubmissionResponseDto),
        (status = 403, description = "Write refused by access policy", body = SubmissionResponseDto),
        (status = 409, description = "Registration already exists", body = SubmissionResponseDto),
        (status = 500, description = "Internal server error", body = SubmissionResponseDto)
    ),
)]
pub async fn submit_inscription(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<impl IntoResponse, SubmissionError> {
    submit(&state, &INSCRIPTION, payload).await
}

/// Submit a hackathon team of three.
///
/// Required fields are `nome1`, `nome2`, `nome3`, `celular` and `email`.
#[utoipa::path(
    post,
    path = "/api/hackathon",
    tag = SUBMISSION_TAG,
    responses(
        (status = 200, description = "Team stored", body = SubmissionResponseDto),
        (status = 400, description = "Validation failed", body = SubmissionResponseDto),
        (status = 403, description = "Write refused by access policy", body = SubmissionResponseDto),
        (status = 409, description = "Team already registered", body = SubmissionResponseDto),
        (status = 500, description = "Internal server error", body = SubmissionResponseDto)
    ),
)]
pub async fn submit_hackathon(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<impl IntoResponse, SubmissionError> {
    submit(&state, &HACKATHON_TEAM, payload).await
}

/// Enroll in the fiber optics workshop.
#[utoipa::path(
    post,
    path = "/api/minicurso-fibra",
    tag = SUBMISSION_TAG,
    responses(
        (status = 200, description = "Enrollment stored", body = SubmissionResponseDto),
        (status = 400, description = "Validation failed", body = SubmissionResponseDto),
        (status = 403, description = "Write refused by access policy", body = SubmissionResponseDto),
        (status = 409, description = "Phone number already enrolled", body = SubmissionResponseDto),
        (status = 500, description = "Internal server error", body = SubmissionResponseDto)
    ),
)]
pub async fn submit_fiber_workshop(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<impl IntoResponse, SubmissionError> {
    submit(&state, &FIBER_WORKSHOP, payload).await
}

/// Enroll in the quantum computing workshop.
#[utoipa::path(
    post,
    path = "/api/minicurso-quantica",
    tag = SUBMISSION_TAG,
    responses(
        (status = 200, description = "Enrollment stored", body = SubmissionResponseDto),
        (status = 400, description = "Validation failed", body = SubmissionResponseDto),
        (status = 403, description = "Write refused by access policy", body = SubmissionResponseDto),
        (status = 409, description = "Phone number already enrolled", body = SubmissionResponseDto),
        (status = 500, description = "Internal server error", body = SubmissionResponseDto)
    ),
)]
pub async fn submit_quantum_workshop(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<impl IntoResponse, SubmissionError> {
    submit(&state, &QUANTUM_WORKSHOP, payload).await
}
