//! JSON Envelope
//!
//! Every JSON response body is an object with exactly one top-level key
//! naming its payload (`movie`, `movies`, `genres`, `error`, ...). Request
//! bodies are decoded strictly: one JSON value, nothing after it, at most
//! [`MAX_BODY_BYTES`] bytes.

/// Strict request body decoding
pub mod request;

/// Enveloped response writing
pub mod response;

pub use request::{read_json, JsonBody, MAX_BODY_BYTES};
pub use response::{error_json, write_json, Envelope, MessageResponse};
