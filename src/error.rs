use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by the JSON API as `{"detail": ...}` bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl From<seaworth_shared::Error> for ApiError {
    fn from(err: seaworth_shared::Error) -> Self {
        match err {
            seaworth_shared::Error::Validate(errors) => ApiError::Validation(errors.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(err) => {
                tracing::error!(err = %err, "api request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
