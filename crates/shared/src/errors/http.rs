use crate::errors::{
    error::{ErrorResponse, FieldError},
    repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Validation failed")]
    ValidationFailed(Vec<FieldError>),

    #[error("Query validation failed")]
    QueryValidationFailed(Vec<FieldError>),

    #[error("Invalid request data: {0}")]
    InvalidPayload(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Query validation error: {0}")]
    InternalValidation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound(_) => HttpError::NotFound(repo_err.to_string()),
            },
            ServiceError::InvalidPagination(msg) => HttpError::BadRequest(msg),
            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::ValidationFailed(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed").with_details(details),
            ),
            HttpError::QueryValidationFailed(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Query validation failed").with_details(details),
            ),
            HttpError::InvalidPayload(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed").with_message(msg),
            ),
            HttpError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new("Payload too large").with_message(msg),
            ),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            HttpError::InternalValidation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Query validation error").with_message(msg),
            ),
            HttpError::Internal(msg) => {
                error!("❌ Unhandled internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
