//! Unified error handling
//!
//! Application error taxonomy and the JSON error envelope:
//! - [`AppError`] - application error enum
//! - [`AppResponse`] - error response body
//!
//! # Error code scheme
//!
//! | Prefix | Category | Example |
//! |--------|----------|---------|
//! | E3xxx  | authentication | E3001 not logged in |
//! | E0xxx  | business | E0002 validation failed |
//! | E9xxx  | system | E9002 database error |
//!
//! Single-item "not found" outcomes are values at the repository layer
//! and only become [`AppError::NotFound`] at the HTTP boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// JSON body returned for every error response
///
/// ```json
/// {
///   "code": "E0003",
///   "message": "Resource not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse {
    /// Error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication (4xx) ==========
    #[error("Authentication required")]
    /// Missing or invalid admin session (401)
    Unauthorized,

    // ========== Business logic (4xx) ==========
    #[error("Resource not found: {0}")]
    /// Target does not exist (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// Malformed or missing input fields (400)
    Validation(String),

    // ========== System (5xx) ==========
    #[error("Database error: {0}")]
    /// Storage backend failure (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "E3001", "Please login first"),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),

            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),

            // Full detail is logged; callers get a generic failure
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse {
            code: code.to_string(),
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Serialization(msg) => AppError::Internal(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}
