//! API Handlers
//!
//! HTTP request handlers for each student endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info, warn};

use super::extract::JsonBody;
use crate::error::{Result, StudentError};
use crate::models::{HealthResponse, MessageResponse, StudentRequest, StudentResponse};
use crate::store::{MemoryStore, StudentFields, StudentId, StudentRepository};

/// Application state shared across all handlers.
///
/// Holds the injected repository; handlers never reach storage any other way.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(students: impl StudentRepository) -> Self {
        Self {
            students: Arc::new(students),
        }
    }

    /// Creates a new AppState backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

/// Validates a request body, logging the rejection.
fn validated(req: StudentRequest) -> Result<StudentFields> {
    req.validate().inspect_err(|err| warn!("Rejected student payload: {}", err))
}

/// Re-reads a document so the response reflects what is stored.
async fn reload(state: &AppState, id: StudentId) -> Result<StudentResponse> {
    state
        .students
        .find_by_id(id)
        .await?
        .map(StudentResponse::from)
        .ok_or_else(StudentError::student_not_found)
}

/// Handler for POST /students
///
/// Creates a student after checking the name and that the email is unused.
pub async fn create_student_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> Result<Json<StudentResponse>> {
    let fields = validated(req)?;

    if state
        .students
        .find_by_email(&fields.email, None)
        .await?
        .is_some()
    {
        warn!("Create rejected, email already in use: {}", fields.email);
        return Err(StudentError::duplicate_email());
    }

    let id = state.students.insert(fields).await?;
    info!("Student created: {}", id);

    Ok(Json(reload(&state, id).await?))
}

/// Handler for GET /students
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>> {
    let students = state.students.list().await?;

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Handler for PUT /students/:id
///
/// Replaces every field of an existing student. Submitting the stored
/// values unchanged succeeds and returns the current record.
pub async fn update_student_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> Result<Json<StudentResponse>> {
    let id = StudentId::parse(&raw_id)?;
    let fields = validated(req)?;

    if state
        .students
        .find_by_email(&fields.email, Some(id))
        .await?
        .is_some()
    {
        warn!("Update of {} rejected, email already in use: {}", id, fields.email);
        return Err(StudentError::duplicate_email());
    }

    let outcome = state.students.update(id, fields).await?;
    if !outcome.matched {
        return Err(StudentError::student_not_found());
    }
    if outcome.modified {
        info!("Student updated: {}", id);
    } else {
        debug!("Update of {} made no changes", id);
    }

    Ok(Json(reload(&state, id).await?))
}

/// Handler for DELETE /students/:id
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = StudentId::parse(&raw_id)?;

    if !state.students.delete(id).await? {
        return Err(StudentError::student_not_found());
    }
    info!("Student deleted: {}", id);

    Ok(Json(MessageResponse::student_deleted()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let students = state.students.count().await?;

    Ok(Json(HealthResponse::healthy(students)))
}
