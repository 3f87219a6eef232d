//! Error types for the student registry
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use thiserror::Error;

// == Student Error Enum ==
/// Unified error type for the student registry.
///
/// Every variant is terminal for the request that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    /// Malformed input (empty name, bad email, malformed id)
    #[error("{0}")]
    Validation(String),

    /// Email already used by another record
    #[error("{0}")]
    Conflict(String),

    /// No record matches the given id
    #[error("{0}")]
    NotFound(String),

    /// Storage failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StudentError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::Validation(_) | StudentError::Conflict(_) => StatusCode::BAD_REQUEST,
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn duplicate_email() -> Self {
        StudentError::Conflict("Email already exists".to_string())
    }

    pub(crate) fn student_not_found() -> Self {
        StudentError::NotFound("Student not found".to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student registry.
pub type Result<T> = std::result::Result<T, StudentError>;
