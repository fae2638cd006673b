//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use masterblog_core::{StorageError, StoreError, ValidationError};
use masterblog_shared::{ErrorResponse, FieldError};

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0:?}")]
    Conflict(Vec<FieldError>),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(errors) => ErrorResponse::conflict(errors.clone()),
            AppError::Validation(errors) => ErrorResponse::validation_failed(errors.clone()),
            AppError::Internal(detail) => {
                // Full context stays in the logs, never in the response.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

fn field_errors(errors: &[ValidationError]) -> Vec<FieldError> {
    errors
        .iter()
        .map(|e| FieldError::new(e.field(), e.to_string()))
        .collect()
}

// Conversion from store errors
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let conflict = err.is_conflict();
        match err {
            StoreError::NotFound { id } => AppError::NotFound(format!("Post {} not found", id)),
            StoreError::Validation(errors) if conflict => AppError::Conflict(field_errors(&errors)),
            StoreError::Validation(errors) => AppError::Validation(field_errors(&errors)),
            other @ (StoreError::IdsExhausted | StoreError::Storage(_)) => {
                AppError::Internal(other.to_string())
            }
        }
    }
}

/// Reject malformed JSON bodies with a problem document instead of plain text.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        error::JsonPayloadError::Serialize(e) => AppError::Internal(e.to_string()).into(),
        other => {
            tracing::debug!(error = %other, "Rejected request body");
            AppError::BadRequest(other.to_string()).into()
        }
    }
}

pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound(err.to_string()).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
