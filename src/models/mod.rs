//! Request and Response models for the student API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{is_valid_email, normalize_email, StudentRequest};
pub use responses::{ErrorResponse, HealthResponse, MessageResponse, StudentResponse};
