//! Error handling - maps failures to HTTP status codes and the `{error}` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postdesk_core::DomainError;
use postdesk_shared::ErrorResponse;

/// Application-level error type rendered as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body or path, validation failure, empty PATCH.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message, .. } => AppError::BadRequest(message),
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Store(e) => AppError::Internal(e.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
