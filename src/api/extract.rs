//! Request Extractors
//!
//! JSON body extraction whose failures use the API's error body.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::StudentError;

/// Like `axum::Json`, but a bad body is rejected as `StudentError::Validation`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = StudentError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for StudentError {
    fn from(rejection: JsonRejection) -> Self {
        StudentError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentRequest;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};

    async fn extract(content_type: &str, body: &str) -> Result<JsonBody<StudentRequest>, StudentError> {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/students")
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        JsonBody::<StudentRequest>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_valid_body() {
        let body = r#"{"name":"Ann","email":"a@x.com","course":"CS","department":"Eng","fees":"100"}"#;
        let JsonBody(req) = extract("application/json", body).await.unwrap();
        assert_eq!(req.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let err = extract("application/json", r#"{"name":"Ann"}"#).await.unwrap_err();
        match &err {
            StudentError::Validation(msg) => assert!(msg.contains("email")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_validation_error() {
        let err = extract("text/plain", "{}").await.unwrap_err();
        assert!(matches!(err, StudentError::Validation(_)));
    }
}
