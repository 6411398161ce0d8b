/**
 * Authentication Extractors
 *
 * This module extracts and verifies the bearer token from the
 * `Authorization` header and provides the caller's identity to handlers.
 *
 * - `AuthUser` rejects the request with 401 when the token is missing or
 *   invalid.
 * - `Option<AuthUser>` yields `None` when no `Authorization` header is sent
 *   and still rejects a header that is present but invalid.
 */

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::ADMIN_USER_TYPE;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub name: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_USER_TYPE
    }

    /// Reject callers without the admin role
    pub fn require_admin(&self) -> Result<(), BackendError> {
        if self.is_admin() {
            Ok(())
        } else {
            tracing::warn!("User {} attempted an admin action", self.user_id);
            Err(BackendError::forbidden(
                "your user account doesn't have the necessary permissions to access this resource",
            ))
        }
    }
}

/// Axum extractor for authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

fn invalid_token() -> BackendError {
    BackendError::unauthorized("invalid or missing authentication token")
}

/// Verify a raw `Authorization` header value
///
/// # Arguments
/// * `header` - Header value, expected as `Bearer <token>`
/// * `tokens` - Token verifier
pub fn authenticate(header: &str, tokens: &TokenIssuer) -> Result<AuthenticatedUser, BackendError> {
    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        invalid_token()
    })?;

    let claims = tokens.verify(token.trim()).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        invalid_token()
    })?;

    let user_id = claims.sub.parse::<i32>().map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        invalid_token()
    })?;

    Ok(AuthenticatedUser {
        user_id,
        name: claims.name,
        role: claims.role,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                invalid_token()
            })?;

        authenticate(header, &state.tokens).map(AuthUser)
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match parts.headers.get(AUTHORIZATION) {
            None => Ok(None),
            Some(value) => {
                let header = value.to_str().map_err(|_| invalid_token())?;
                authenticate(header, &state.tokens).map(|user| Some(AuthUser(user)))
            }
        }
    }
}
