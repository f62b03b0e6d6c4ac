//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("data directory {path}: {source}")]
    DataDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Data-access operation a store failure happened in. Selects the 500 message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Failed to create resource",
            Operation::List => "Failed to retrieve resources",
            Operation::Get => "Failed to retrieve resource",
            Operation::Update => "Failed to update resource",
            Operation::Delete => "Failed to delete resource",
        }
    }
}

pub const RESOURCE_NOT_FOUND: &str = "Resource not found";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    /// Body could not be read (too large, unreadable, bad form encoding).
    #[error("{message}")]
    BodyRejected { status: StatusCode, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{}: {source}", .op.failure_message())]
    Store {
        op: Operation,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn store(op: Operation) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Store { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::BodyRejected { status, .. } => *status,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => json!({ "error": msg }),
            AppError::InvalidBody(msg) => json!({
                "error": "Invalid request body",
                "message": msg,
            }),
            AppError::BodyRejected { status, message } => json!({
                "error": status.canonical_reason().unwrap_or("Bad Request"),
                "message": message,
            }),
            AppError::Store { op, source } => {
                tracing::error!(operation = ?op, error = %source, "store failure");
                json!({
                    "error": op.failure_message(),
                    "details": source.to_string(),
                })
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Body for failures no handler converted into a response (panics).
pub fn internal_error_body(message: &str) -> serde_json::Value {
    json!({
        "error": "Internal Server Error",
        "message": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidBody("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        let store = AppError::store(Operation::Delete)(sqlx::Error::PoolClosed);
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store.to_string().starts_with("Failed to delete resource"));
        let rejected = AppError::BodyRejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".into(),
        };
        assert_eq!(rejected.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
