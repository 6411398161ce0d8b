//! Enveloped Response Writing

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize `data`, optionally wrapping it under a single `wrap` key
///
/// # Arguments
///
/// * `status` - Response status code
/// * `data` - Payload to serialize
/// * `wrap` - Envelope key; `None` writes the payload as-is
///
/// # Errors
///
/// Returns the serialization error if `data` cannot be represented as JSON.
pub fn write_json<T: Serialize>(
    status: StatusCode,
    data: &T,
    wrap: Option<&str>,
) -> Result<Response, serde_json::Error> {
    let value = serde_json::to_value(data)?;
    let body = match wrap {
        Some(key) => {
            let mut envelope = Map::new();
            envelope.insert(key.to_string(), value);
            Value::Object(envelope)
        }
        None => value,
    };
    Ok((status, Json(body)).into_response())
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

/// Write `{"error": {"message": ...}}` with the given status
pub fn error_json(status: StatusCode, message: &str) -> Response {
    write_json(status, &ErrorBody { message }, Some("error")).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize error body: {:?}", e);
        status.into_response()
    })
}

/// A payload wrapped under one top-level key
///
/// Handlers return this instead of `Json<T>` so every success response
/// carries the envelope.
#[derive(Debug)]
pub struct Envelope<T> {
    status: StatusCode,
    key: &'static str,
    data: T,
}

impl<T> Envelope<T> {
    /// 200 OK
    pub fn ok(key: &'static str, data: T) -> Self {
        Self::with_status(StatusCode::OK, key, data)
    }

    /// 201 Created
    pub fn created(key: &'static str, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, key, data)
    }

    pub fn with_status(status: StatusCode, key: &'static str, data: T) -> Self {
        Self { status, key, data }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        write_json(self.status, &self.data, Some(self.key)).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize {} payload: {:?}", self.key, e);
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "the server encountered a problem and could not process your request",
            )
        })
    }
}

/// Unwrapped `{ "ok": true, "message": ... }` acknowledgement
#[derive(Debug, Clone, Serialize, serde::Deserialize, PartialEq)]
pub struct MessageResponse {
    pub ok: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}
