//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Inside the CRUD workflow these become
//! view models or flashes; only a malformed path reaches HTTP as an error.

use std::num::ParseIntError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationErrors;
use platform::password::PasswordHashError;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("No {label} found with id {id}")]
    RecordNotFound { label: &'static str, id: i32 },

    /// A unique business key already belongs to another record
    #[error("{message}")]
    Duplicate { field: &'static str, message: String },

    #[error("Invalid id: {0}")]
    InvalidId(#[from] ParseIntError),

    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::Duplicate { .. } => StatusCode::CONFLICT,
            CatalogError::InvalidId(_) => StatusCode::BAD_REQUEST,
            CatalogError::PasswordHash(_)
            | CatalogError::Database(_)
            | CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::UnprocessableEntity,
            CatalogError::RecordNotFound { .. } => ErrorKind::NotFound,
            CatalogError::Duplicate { .. } => ErrorKind::Conflict,
            CatalogError::InvalidId(_) => ErrorKind::BadRequest,
            CatalogError::PasswordHash(_)
            | CatalogError::Database(_)
            | CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            CatalogError::Database(e) => AppError::from(e),
            CatalogError::InvalidId(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Duplicate { field, .. } => {
                tracing::warn!(field = %field, error = %self, "Duplicate key rejected");
            }
            CatalogError::RecordNotFound { .. } => {
                tracing::warn!(error = %self, "Record not found");
            }
            CatalogError::Validation(_) | CatalogError::InvalidId(_) => {
                tracing::debug!(error = %self, "Catalog request rejected");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
