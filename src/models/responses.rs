//! Response DTOs for the student API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::store::StudentDocument;

/// A student record as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentResponse {
    /// String form of the store-assigned id
    pub id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub department: String,
    pub fees: String,
}

impl From<StudentDocument> for StudentResponse {
    fn from(document: StudentDocument) -> Self {
        let StudentDocument { id, fields } = document;
        Self {
            id: id.to_string(),
            name: fields.name,
            email: fields.email,
            course: fields.course,
            department: fields.department,
            fees: fields.fees,
        }
    }
}

/// Confirmation body, e.g. for DELETE /students/:id
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn student_deleted() -> Self {
        Self::new("Student deleted successfully")
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Number of stored students
    pub students: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(students: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            students,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    pub detail: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
