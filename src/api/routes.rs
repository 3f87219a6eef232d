//! API Routes
//!
//! Configures the Axum router with all student endpoints.

use axum::{
    http::HeaderValue,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    create_student_handler, delete_student_handler, health_handler, list_students_handler,
    update_student_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /students` - Create a student
/// - `GET /students` - List all students
/// - `PUT /students/:id` - Replace a student's fields
/// - `DELETE /students/:id` - Delete a student
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows the configured frontend origin, with credentials
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, cors_origin: &str) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/:id",
            put(update_student_handler).delete(delete_student_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer for a single trusted origin.
///
/// Credentials rule out wildcards, so methods and headers mirror the request.
/// Requests from any other origin get no CORS headers.
pub fn cors_layer(origin: &str) -> CorsLayer {
    let allowed: Vec<HeaderValue> = match HeaderValue::from_str(origin) {
        Ok(origin) => vec![origin],
        Err(_) => {
            warn!("Ignoring invalid CORS origin: {:?}", origin);
            Vec::new()
        }
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
