use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use std::collections::BTreeMap;
use validator::ValidationErrors;

use crate::domain::validation::field_messages;
use crate::notifications::FormKind;
use crate::routes::helpers::{ErrorBody, error_chain_fmt};

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("The {0} failed validation.")]
    ValidationError(FormKind, #[source] ValidationErrors),
    #[error("Failed to process the {0}.")]
    UnexpectedError(FormKind, #[source] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Serialize)]
struct ValidationErrorBody<'a> {
    error: &'a str,
    fields: BTreeMap<String, Vec<String>>,
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::ValidationError(..) => StatusCode::BAD_REQUEST,
            SubmitError::UnexpectedError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SubmitError::ValidationError(kind, errors) => {
                HttpResponse::BadRequest().json(ValidationErrorBody {
                    error: kind.invalid_message(),
                    fields: field_messages(errors),
                })
            }
            SubmitError::UnexpectedError(kind, _) => {
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: kind.failure_message(),
                })
            }
        }
    }
}
