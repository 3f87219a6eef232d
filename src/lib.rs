//! Student Registry - A small HTTP API for student records
//!
//! Provides create, list, update and delete over a document collection,
//! with unique emails and store-assigned ids.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{Result, StudentError};
pub use store::{MemoryStore, StudentRepository};
