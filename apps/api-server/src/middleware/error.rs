//! Error handling middleware - `{code, message}` responses.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type. Each variant maps to exactly one status.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed(String),
    Conflict(String),
    UnsupportedMediaType(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::MethodNotAllowed(detail) => ErrorResponse::method_not_allowed(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::UnsupportedMediaType(detail) => ErrorResponse::unsupported_media_type(detail),
            AppError::Internal(detail) => {
                // Details stay in the log, never in the body
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        if self.status_code().is_client_error() {
            tracing::warn!(status = self.status_code().as_u16(), "{}", self);
        }

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<blog_core::DomainError> for AppError {
    fn from(err: blog_core::DomainError) -> Self {
        use blog_core::DomainError;

        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(msg) | DomainError::InvalidReference(msg) => {
                AppError::BadRequest(msg)
            }
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<blog_core::RepoError> for AppError {
    fn from(err: blog_core::RepoError) -> Self {
        match err {
            blog_core::RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            blog_core::RepoError::Query(msg) => {
                AppError::Internal(format!("Database query error: {}", msg))
            }
            blog_core::RepoError::Serialization(msg) => {
                AppError::Internal(format!("Stored document is corrupt: {}", msg))
            }
        }
    }
}

/// Maps body extraction failures into the shared error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::ContentType => {
            AppError::UnsupportedMediaType("Content type must be application/json".to_string())
        }
        other => AppError::BadRequest(format!("Json parsing error: {}", other)),
    }
    .into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
