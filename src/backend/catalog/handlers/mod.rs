//! Catalog Handlers Module
//!
//! # Handlers
//!
//! - **`movies`** - Movie listings and detail
//! - **`genres`** - Genre listing and admin CRUD
//! - **`ratings`** - Rating a movie
//! - **`status`** - Service status

pub mod genres;
pub mod movies;
pub mod ratings;
pub mod status;
pub mod types;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::backend::error::BackendError;

pub const INVALID_ID: &str = "invalid id parameter";

/// Positive integer id taken from the route's single path parameter
///
/// Any rejection, including a segment that is not valid UTF-8, answers
/// 400 "invalid id parameter".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i32);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected id path segment: {}", rejection.body_text());
                BackendError::bad_request(INVALID_ID)
            })?;
        parse_id(&raw).map(IdParam)
    }
}

/// Parse a positive integer path parameter
pub fn parse_id(raw: &str) -> Result<i32, BackendError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            tracing::warn!("Rejected id parameter {:?}", raw);
            Err(BackendError::bad_request(INVALID_ID))
        }
    }
}
