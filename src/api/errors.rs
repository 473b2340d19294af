use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::customer::ValidationError;
use crate::domain::repositories::RepositoryError;

/// Message returned when no customer matches the requested id
pub const NOT_FOUND_MESSAGE: &str = "Cliente não encontrado.";

/// API error type, mapped to an HTTP response in one place
#[derive(Debug)]
pub enum ApiError {
    /// Rejected input, before any database call (400)
    Validation(ValidationError),
    /// No row matched or was affected (404)
    NotFound,
    /// Database failure (500); `context` names the failed operation
    Infrastructure {
        context: &'static str,
        source: RepositoryError,
    },
}

impl ApiError {
    /// Creates a 404 Not Found error
    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Creates a 500 Internal Server Error for a failed database operation
    pub fn internal(context: &'static str, source: RepositoryError) -> Self {
        Self::Infrastructure { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Infrastructure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(error) => json!({ "message": error.to_string() }),
            Self::NotFound => json!({ "message": NOT_FOUND_MESSAGE }),
            Self::Infrastructure { context, source } => {
                tracing::error!(error = %source, "{}", context);
                json!({
                    "message": context,
                    "error": source.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationError::InvalidBody(rejection.body_text()))
    }
}
