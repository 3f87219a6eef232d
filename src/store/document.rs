//! Student Document Module
//!
//! Defines the stored representation of a student record and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StudentError};

// == Student Id ==
/// Identifier assigned by the store when a document is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses the external string form of an id.
    ///
    /// Malformed input is a validation failure, never a panic.
    pub fn parse(raw: &str) -> Result<Self> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| StudentError::Validation(format!("Invalid student id: {raw}")))
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

// == Student Fields ==
/// The mutable part of a student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub course: String,
    pub department: String,
    /// Kept as text exactly as submitted
    pub fees: String,
}

// == Student Document ==
/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDocument {
    pub id: StudentId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl StudentDocument {
    /// Creates a document under a newly generated id.
    pub fn new(fields: StudentFields) -> Self {
        Self {
            id: StudentId::generate(),
            fields,
        }
    }
}
