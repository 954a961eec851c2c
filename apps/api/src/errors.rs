use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::validation::FieldError;
use crate::content::ContentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Nothing in the service retries on any of these; every failure is returned to the
/// request that caused it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("User not found")]
    UserNotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(Vec<FieldError>),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Remote service error: {0}")]
    Remote(String),

    #[error("Render target missing: {0}")]
    RenderTargetMissing(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// `Json` extractor whose rejection is an `AppError`, so a malformed body gets the same
/// error envelope as every other failure.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
            AppError::Validation(_) | AppError::InvalidFields(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::Remote(_) => (StatusCode::BAD_GATEWAY, "REMOTE_SERVICE_ERROR"),
            AppError::RenderTargetMissing(_) => (StatusCode::NOT_FOUND, "RENDER_TARGET_MISSING"),
            AppError::Render(_) => (StatusCode::BAD_GATEWAY, "RENDER_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Unauthorized => "Authentication required".to_string(),
            AppError::UserNotFound => "User not found".to_string(),
            AppError::Validation(msg) | AppError::RenderTargetMissing(msg) => msg.clone(),
            AppError::InvalidFields(fields) => {
                format!("{} field(s) failed validation", fields.len())
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                "Failed to access stored documents".to_string()
            }
            AppError::Remote(msg) => {
                tracing::error!("Remote service error: {msg}");
                "The AI service could not complete the request".to_string()
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                "Failed to generate PDF".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = match &self {
            AppError::InvalidFields(fields) => json!({
                "error": {
                    "code": code,
                    "message": message,
                    "fields": fields,
                }
            }),
            _ => json!({
                "error": {
                    "code": code,
                    "message": message
                }
            }),
        };

        (status, Json(body)).into_response()
    }
}
