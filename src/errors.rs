//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::ValidationError;

/// Entities that can be looked up by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Hero,
    Power,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Hero => write!(f, "Hero"),
            Resource::Power => write!(f, "Power"),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested entity does not exist
    #[error("{0} not found")]
    NotFound(Resource),

    /// An entity referenced by a new link does not exist
    #[error("{0} not found.")]
    MissingReference(Resource),

    // Validation
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// A write or commit was rejected by the store (already rolled back)
    #[error("{0}")]
    Persistence(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body.
///
/// Lookups report a single `error`; writes report a list of `errors`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorResponse {
    Single { error: String },
    Many { errors: Vec<String> },
}

impl AppError {
    /// Get error code (used for logging)
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MissingReference(_) => "MISSING_REFERENCE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::MissingReference(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Persistence(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the response body (hides internal details)
    fn body(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(_) => ErrorResponse::Single {
                error: self.to_string(),
            },
            AppError::MissingReference(_) | AppError::Persistence(_) => ErrorResponse::Many {
                errors: vec![self.to_string()],
            },
            AppError::Validation(messages) => ErrorResponse::Many {
                errors: messages.clone(),
            },
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ErrorResponse::Single {
                    error: "A database error occurred".to_string(),
                }
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::Single {
                    error: "An internal error occurred".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(code = self.code(), status = status.as_u16(), "request failed");

        (status, Json(self.body())).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(vec![err.message])
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, resource: Resource) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, resource: Resource) -> AppResult<T> {
        self.ok_or(AppError::NotFound(resource))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    pub fn persistence(err: impl std::fmt::Display) -> Self {
        AppError::Persistence(err.to_string())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_single_error() {
        let (status, body) = body_json(AppError::NotFound(Resource::Hero)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Hero not found" }));
    }

    #[tokio::test]
    async fn missing_reference_renders_error_list() {
        let (status, body) = body_json(AppError::MissingReference(Resource::Power)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "errors": ["Power not found."] }));
    }

    #[tokio::test]
    async fn validation_keeps_every_message() {
        let err = AppError::Validation(vec!["first".to_string(), "second".to_string()]);
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "errors": ["first", "second"] }));
    }

    #[tokio::test]
    async fn persistence_failures_are_client_errors() {
        let (status, body) =
            body_json(AppError::persistence("FOREIGN KEY constraint failed")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "errors": ["FOREIGN KEY constraint failed"] })
        );
    }

    #[tokio::test]
    async fn internal_details_are_hidden() {
        let (status, body) = body_json(AppError::internal("pool exhausted")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "An internal error occurred" }));
    }

    #[test]
    fn ok_or_not_found_names_the_resource() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found(Resource::Power).unwrap_err();

        assert!(matches!(err, AppError::NotFound(Resource::Power)));
        assert_eq!(err.to_string(), "Power not found");
    }
}
