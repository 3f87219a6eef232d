//! Store Module
//!
//! Persistence layer: the student document type, the repository trait the
//! HTTP layer depends on, and an in-memory implementation.

mod document;
mod memory;
mod repository;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use document::{StudentDocument, StudentFields, StudentId};
pub use memory::{MemoryStore, StudentCollection};
pub use repository::{StudentRepository, UpdateOutcome};
