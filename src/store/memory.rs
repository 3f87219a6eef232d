//! In-Memory Document Store
//!
//! A student collection held in process memory, with a unique index on email.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StudentError};
use crate::store::{StudentDocument, StudentFields, StudentId, StudentRepository, UpdateOutcome};

// == Student Collection ==
/// Documents in insertion order plus an email → id index.
#[derive(Debug, Default)]
pub struct StudentCollection {
    documents: Vec<StudentDocument>,
    email_index: HashMap<String, StudentId>,
}

impl StudentCollection {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Inserts a new document, enforcing email uniqueness.
    pub fn insert(&mut self, fields: StudentFields) -> Result<StudentId> {
        if self.email_index.contains_key(&fields.email) {
            return Err(StudentError::duplicate_email());
        }

        let document = StudentDocument::new(fields);
        let id = document.id;
        self.email_index.insert(document.fields.email.clone(), id);
        self.documents.push(document);

        Ok(id)
    }

    // == Get ==
    pub fn get(&self, id: StudentId) -> Option<&StudentDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    // == Find By Email ==
    pub fn find_by_email(&self, email: &str, exclude: Option<StudentId>) -> Option<&StudentDocument> {
        let id = *self.email_index.get(email)?;
        if exclude == Some(id) {
            return None;
        }
        self.get(id)
    }

    // == Update ==
    /// Replaces the fields of an existing document.
    ///
    /// The email index moves with the document when its email changes.
    pub fn update(&mut self, id: StudentId, fields: StudentFields) -> Result<UpdateOutcome> {
        if let Some(&owner) = self.email_index.get(&fields.email) {
            if owner != id {
                return Err(StudentError::duplicate_email());
            }
        }

        let Some(document) = self.documents.iter_mut().find(|doc| doc.id == id) else {
            return Ok(UpdateOutcome {
                matched: false,
                modified: false,
            });
        };

        if document.fields == fields {
            return Ok(UpdateOutcome {
                matched: true,
                modified: false,
            });
        }

        if document.fields.email != fields.email {
            self.email_index.remove(&document.fields.email);
            self.email_index.insert(fields.email.clone(), id);
        }
        document.fields = fields;

        Ok(UpdateOutcome {
            matched: true,
            modified: true,
        })
    }

    // == Delete ==
    /// Removes a document by id. Returns the removed document, if any.
    pub fn delete(&mut self, id: StudentId) -> Option<StudentDocument> {
        let position = self.documents.iter().position(|doc| doc.id == id)?;
        let document = self.documents.remove(position);
        self.email_index.remove(&document.fields.email);
        Some(document)
    }

    // == Iter ==
    pub fn iter(&self) -> impl Iterator<Item = &StudentDocument> {
        self.documents.iter()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

// == Memory Store ==
/// Shareable handle to an in-memory student collection.
///
/// Each operation takes the lock once, so the uniqueness check and the
/// write it guards are atomic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collection: Arc<RwLock<StudentCollection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.collection.read().await.len()
    }
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn insert(&self, fields: StudentFields) -> Result<StudentId> {
        self.collection.write().await.insert(fields)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<StudentDocument>> {
        Ok(self.collection.read().await.get(id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude: Option<StudentId>,
    ) -> Result<Option<StudentDocument>> {
        Ok(self
            .collection
            .read()
            .await
            .find_by_email(email, exclude)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<StudentDocument>> {
        Ok(self.collection.read().await.iter().cloned().collect())
    }

    async fn update(&self, id: StudentId, fields: StudentFields) -> Result<UpdateOutcome> {
        self.collection.write().await.update(id, fields)
    }

    async fn delete(&self, id: StudentId) -> Result<bool> {
        Ok(self.collection.write().await.delete(id).is_some())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.collection.read().await.len())
    }
}
