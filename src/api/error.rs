use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::db::{StoreError, ValidationErrors};

/// Client-facing error for the article API.
///
/// `NotFound` and `Validation` map straight to their status codes with a
/// structured body. Anything else is logged server-side and returned as a
/// generic 500 so internal details never reach the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("article not found")]
    NotFound,
    #[error("validation failed")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Validation(errors) => ApiError::Validation(errors),
            StoreError::Sqlite(e) => ApiError::Internal(e.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Article not found" })),
            )
                .into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
