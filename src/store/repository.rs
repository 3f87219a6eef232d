//! Repository Trait
//!
//! The operations the HTTP layer needs from a document store.

use async_trait::async_trait;

use crate::error::Result;
use crate::store::{StudentDocument, StudentFields, StudentId};

/// Outcome of an update-by-id, mirroring document store semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// A document with the id existed
    pub matched: bool,
    /// The stored fields actually changed
    pub modified: bool,
}

/// Persistence operations over the student collection.
///
/// Implementations must reject an insert or update that would give two
/// documents the same email, returning `StudentError::Conflict`.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    /// Stores a new document and returns its assigned id.
    async fn insert(&self, fields: StudentFields) -> Result<StudentId>;

    /// Looks up a document by id.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<StudentDocument>>;

    /// Looks up a document by email, ignoring the document with `exclude` if given.
    async fn find_by_email(
        &self,
        email: &str,
        exclude: Option<StudentId>,
    ) -> Result<Option<StudentDocument>>;

    /// Returns every document in insertion order.
    async fn list(&self) -> Result<Vec<StudentDocument>>;

    /// Replaces the fields of the document with `id`.
    async fn update(&self, id: StudentId, fields: StudentFields) -> Result<UpdateOutcome>;

    /// Removes the document with `id`. Returns `true` if one was removed.
    async fn delete(&self, id: StudentId) -> Result<bool>;

    /// Number of stored documents.
    async fn count(&self) -> Result<usize>;
}
