/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from handlers and extractors.
 *
 * # Response Format
 *
 * Error responses use the same envelope as successful ones, keyed by
 * `error`:
 * ```json
 * {
 *   "error": { "message": "invalid id parameter" }
 * }
 * ```
 *
 * Validation failures are the exception: the body is the raw field map,
 * for example `{ "email": "invalid email address" }`.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::envelope::error_json;
use crate::backend::error::types::{BackendError, DbError};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            BackendError::ValidationFailed { errors } => (status, Json(errors)).into_response(),
            other => error_json(status, &other.message()),
        }
    }
}

/// Default translation of data errors
///
/// Handlers that need a resource-specific message (`movie not found`) match
/// on `DbError` themselves; everything else goes through here. Driver
/// details are logged and replaced by a generic message.
impl From<DbError> for BackendError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => {
                BackendError::not_found("the requested resource could not be found")
            }
            DbError::Timeout(limit) => {
                tracing::error!("Database call timed out after {:?}", limit);
                BackendError::timeout("the database took too long to respond")
            }
            DbError::Persistence(message) => BackendError::persistence(message),
            DbError::Query(e) => {
                tracing::error!("Database query failed: {:?}", e);
                BackendError::persistence(
                    "the server encountered a problem and could not process your request",
                )
            }
        }
    }
}
