//! Error handling middleware - maps failures to HTTP responses.
//!
//! Not-found replies carry no body. Every other error uses an RFC 7807 body.

use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    web,
};
use feedline_core::RepoError;
use feedline_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                return HttpResponse::NotFound().finish();
            }
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::PayloadTooLarge(detail) => ErrorResponse::payload_too_large(detail),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Cap JSON bodies at `limit` bytes. Oversized bodies get a 413, undecodable ones a 400.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                AppError::PayloadTooLarge(err.to_string()).into()
            }
            _ => AppError::BadRequest(err.to_string()).into(),
        })
}

/// Reject path segments that do not parse (e.g. a non-numeric id) with a 400.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err: PathError, _req: &HttpRequest| {
            AppError::BadRequest(err.to_string()).into()
        })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
