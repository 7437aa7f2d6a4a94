//! Application-wide error type.
//!
//! Every handler returns [`AppError`] for its failure path; the
//! `IntoResponse` impl maps each variant to an HTTP status and a JSON body.
//! Server-side failures are logged with their full cause but surface only
//! an opaque message to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::Duplicate(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For server-side failures the raw message stays in the logs; the
    /// client gets a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::Duplicate(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::ExternalService(_) => "Service temporarily unavailable".to_string(),
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::Database(_) => "Database",
            AppError::ExternalService(_) => "ExternalService",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Duplicate(_) => "Duplicate",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Forbidden(_) => "Forbidden",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

/// Convert driver errors; the duplicate-key case is mapped explicitly at
/// the insert sites that care about it.
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message() {
        let err = AppError::Duplicate("Session already booked".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Session already booked");

        let err = AppError::NotFound("Session not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Session not found");
    }

    #[test]
    fn server_errors_are_opaque() {
        let err = AppError::Database("E11000 dup key: { studentEmail: ... }".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "An internal error occurred");

        let err = AppError::ExternalService("stripe: invalid api key".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.user_message(), "Service temporarily unavailable");
    }

    #[test]
    fn auth_errors_map_to_401_and_403() {
        assert_eq!(
            AppError::Unauthorized("Missing authentication token".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("Admin role required".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
