use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::submission::SubmissionResponseDto, server::service::classifier::PersistenceFailure};

/// Reasons a form submission is not stored.
///
/// Validation failures carry their own client-facing message. Persistence failures carry
/// the classified user message plus the store's raw error text, which is echoed to the
/// caller as `technical_error`. Everything else is reported with a generic message and
/// logged server-side only.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The request body carried no fields.
    ///
    /// Results in 400 Bad Request.
    #[error("Nenhum dado recebido")]
    NoData,

    /// Required fields are absent or empty, listed in form order.
    ///
    /// Results in 400 Bad Request naming the fields.
    #[error("Campos obrigatórios não preenchidos: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The honeypot field was filled in.
    ///
    /// Results in 400 Bad Request with a deliberately vague message.
    #[error("Erro de validação")]
    SpamDetected,

    /// The persistence gateway refused or failed the insert.
    ///
    /// Status and message come from the classifier.
    #[error("{}", .0.technical_detail())]
    Persistence(PersistenceFailure),

    /// The insert reported success but returned no rows.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Insert returned no rows")]
    NoRowsReturned,

    /// Any other failure while handling the submission.
    ///
    /// Results in 500 Internal Server Error. The detail is logged but never returned.
    #[error("{0}")]
    Internal(String),
}

impl SubmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoData | Self::MissingFields(_) | Self::SpamDetected => StatusCode::BAD_REQUEST,
            Self::Persistence(failure) => failure.status(),
            Self::NoRowsReturned | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts submission errors into the JSON body the forms expect.
///
/// # Returns
/// - 400 Bad Request - No data, missing fields, honeypot filled
/// - 409 / 403 / 400 / 500 - Persistence failures, per classification, with `technical_error`
/// - 500 Internal Server Error - No rows returned, or any internal failure
impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Persistence(failure) => SubmissionResponseDto::failed(
                failure.user_message(),
                Some(failure.technical_detail().to_string()),
            ),
            Self::NoRowsReturned => SubmissionResponseDto::failed("Erro ao salvar dados", None),
            Self::Internal(detail) => {
                tracing::error!("Internal error while handling submission: {}", detail);
                SubmissionResponseDto::failed("Erro interno do servidor", None)
            }
            err => SubmissionResponseDto::failed(err.to_string(), None),
        };

        (status, Json(body)).into_response()
    }
}
