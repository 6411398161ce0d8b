/**
 * Request Body Decoding
 *
 * `JsonBody<T>` replaces `axum::Json<T>` for every handler that accepts a
 * body. It differs in three ways:
 *
 * - Failures are reported through `BackendError`, so they carry the usual
 *   error envelope.
 * - Trailing data after the first JSON value is rejected.
 * - An empty body is rejected with its own message.
 *
 * The content type is not checked.
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::backend::error::BackendError;

/// Request bodies larger than 1 MiB are rejected
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Decode exactly one JSON value from `body`
///
/// # Arguments
///
/// * `body` - Raw request body
///
/// # Returns
///
/// The decoded value, or a `BadRequest` describing what was wrong with the
/// body.
pub fn read_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    if body.len() > MAX_BODY_BYTES {
        return Err(too_large());
    }

    let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<T>();
    let value = match stream.next() {
        Some(Ok(value)) => value,
        Some(Err(e)) => return Err(BackendError::bad_request(describe(&e))),
        None => return Err(BackendError::bad_request("body must not be empty")),
    };

    let rest = &body[stream.byte_offset()..];
    if !rest.iter().all(u8::is_ascii_whitespace) {
        return Err(BackendError::bad_request(
            "body must only contain a single JSON value",
        ));
    }

    Ok(value)
}

fn describe(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Syntax => format!(
            "body contains badly-formed JSON (at line {} column {})",
            err.line(),
            err.column()
        ),
        Category::Eof => "body contains badly-formed JSON".to_string(),
        Category::Data => format!("body contains incorrect JSON: {}", err),
        Category::Io => "body could not be read".to_string(),
    }
}

fn too_large() -> BackendError {
    BackendError::payload_too_large(format!(
        "body must not be larger than {} bytes",
        MAX_BODY_BYTES
    ))
}

/// Strict JSON body extractor
///
/// Must be the last extractor in a handler's argument list.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Failed to read request body: {}", rejection.body_text());
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                too_large()
            } else {
                BackendError::bad_request("body could not be read")
            }
        })?;

        read_json(&bytes).map(JsonBody)
    }
}
