/**
 * Backend Error Types
 *
 * This module defines the two error types used on the server side.
 *
 * # Error Types
 *
 * - `DbError` - Failures reported by the data access layer
 * - `BackendError` - Failures reported to HTTP clients
 *
 * # Error Categories
 *
 * ## Data Errors
 *
 * Data access functions never talk HTTP. They report one of:
 * - No matching row (`NotFound`)
 * - The per-call deadline passed (`Timeout`)
 * - A write was rejected and replaced by a fixed message (`Persistence`)
 * - Any other driver error (`Query`)
 *
 * ## Handler Errors
 *
 * Handlers translate data errors into a `BackendError` carrying a fixed,
 * client-safe message. The underlying cause is logged, never returned.
 */

use std::collections::BTreeMap;
use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the data access layer
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the query
    #[error("no matching record found")]
    NotFound,

    /// The operation did not finish within the configured deadline
    #[error("database call exceeded {0:?}")]
    Timeout(Duration),

    /// A write failed; the driver error has already been logged
    #[error("{0}")]
    Persistence(String),

    /// Any other driver error
    #[error("database query failed: {0}")]
    Query(sqlx::Error),
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Query(other),
        }
    }
}

/// Backend-specific error types
///
/// Every variant maps to one HTTP status code and carries the message shown
/// to the client. `ValidationFailed` carries the full per-field error set.
///
/// # Usage
///
/// ```rust
/// use movie_catalog::backend::error::BackendError;
///
/// let err = BackendError::bad_request("invalid id parameter");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed input: bad path parameter, bad JSON body, bad query string
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Missing or invalid credentials
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Authenticated but not allowed
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// No matching record
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The route exists but not for this method
    #[error("method not allowed: {message}")]
    MethodNotAllowed { message: String },

    /// Request body exceeds the size cap
    #[error("payload too large: {message}")]
    PayloadTooLarge { message: String },

    /// One or more fields failed validation
    #[error("validation failed on {} field(s)", errors.len())]
    ValidationFailed { errors: BTreeMap<String, String> },

    /// Store failure; the message is generic
    #[error("persistence error: {message}")]
    Persistence { message: String },

    /// Signing or hashing failure
    #[error("internal error: {message}")]
    Internal { message: String },

    /// The database is not configured
    #[error("service unavailable: {message}")]
    Unavailable { message: String },

    /// A data-layer deadline passed
    #[error("timeout: {message}")]
    Timeout { message: String },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed { message: message.into() }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge { message: message.into() }
    }

    pub fn validation(errors: BTreeMap<String, String>) -> Self {
        Self::ValidationFailed { errors }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable { message: message.into() }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout { message: message.into() }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest`, `ValidationFailed` - 400
    /// - `Unauthorized` - 401
    /// - `Forbidden` - 403
    /// - `NotFound` - 404
    /// - `MethodNotAllowed` - 405
    /// - `PayloadTooLarge` - 413
    /// - `Persistence`, `Internal` - 500
    /// - `Unavailable` - 503
    /// - `Timeout` - 504
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::MethodNotAllowed { message }
            | Self::PayloadTooLarge { message }
            | Self::Persistence { message }
            | Self::Internal { message }
            | Self::Unavailable { message }
            | Self::Timeout { message } => message.clone(),
            Self::ValidationFailed { .. } => "validation failed".to_string(),
        }
    }
}
