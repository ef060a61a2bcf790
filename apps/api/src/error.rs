use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP-facing error type. Everything a handler can fail with renders as
/// `{"error": "<message>"}` with the status from `status()`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidData(String),
    #[error("{0}")]
    Db(String),
    /// Unclassified failure. The detail is logged, never surfaced.
    #[error("Internal Server Error")]
    Internal { detail: String },
}

impl AppError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn invalid_data(detail: impl Into<String>) -> Self {
        Self::InvalidData(detail.into())
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidData(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(detail) => AppError::NotFound(detail),
            DomainError::InvalidData(detail) => AppError::InvalidData(detail),
            DomainError::Db(detail) => AppError::Db(detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Internal { detail } => {
                tracing::error!(detail = %detail, "unclassified failure");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status()).json(ErrorBody { error: message })
    }
}
