//! API Module
//!
//! HTTP handlers and routing for the student REST API.
//!
//! # Endpoints
//! - `POST /students` - Create a student
//! - `GET /students` - List all students
//! - `PUT /students/:id` - Replace a student's fields
//! - `DELETE /students/:id` - Delete a student
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::JsonBody;
pub use handlers::*;
pub use routes::{cors_layer, create_router};
