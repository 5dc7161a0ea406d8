use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use caseforge_core::storage::{repository_error_to_status_code, RepositoryError};
use caseforge_core::validation::ValidationError;

/// Handler error.
///
/// Body and query rejections and validation failures become 400, repository failures
/// keep their mapped status code, anything else becomes an opaque 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", rejection.body_text()),
            )
            .into_response();
        }
        if let Some(rejection) = self.0.downcast_ref::<QueryRejection>() {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid query string: {}", rejection.body_text()),
            )
            .into_response();
        }
        if let Some(invalid) = self.0.downcast_ref::<ValidationError>() {
            return error_response(StatusCode::BAD_REQUEST, invalid.to_string()).into_response();
        }

        let (status_code, message) =
            if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
                let code = repository_error_to_status_code(repo_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    repo_error.to_string(),
                )
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            };

        tracing::error!(status = %status_code, error = %self.0, "Request failed");

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Error response with message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, Json(json!({ "error": msg })))
}
