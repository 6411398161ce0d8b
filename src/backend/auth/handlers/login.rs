/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /v1/user/login/.
 *
 * # Security
 *
 * An unknown email, a lookup failure and a wrong password all produce the
 * same 401 response. An unknown email still pays for one bcrypt
 * verification.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::passwords::verify_in_background;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{get_user_by_email, normalize_email};
use crate::backend::database::Database;
use crate::backend::envelope::JsonBody;
use crate::backend::error::BackendError;

pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Login handler
///
/// # Returns
///
/// `{ "ok": true, "message": ..., "token": ... }`
///
/// # Errors
///
/// * `401 Unauthorized` - If the email or password is wrong
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If token signing fails
pub async fn login(
    State(db): State<Option<Database>>,
    State(tokens): State<TokenIssuer>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let db = Database::require(db)?;
    let email = normalize_email(&request.email);

    let user = match get_user_by_email(&db, &email).await {
        Ok(user) => Some(user),
        Err(e) if e.is_not_found() => {
            tracing::warn!("Login attempt for unknown email");
            None
        }
        Err(e) => {
            tracing::error!("Failed to look up user during login: {:?}", e);
            None
        }
    };

    let stored_hash = user.as_ref().map(|u| u.password.clone());
    let password_ok = verify_in_background(stored_hash, request.password).await;

    let user = match user {
        Some(user) if password_ok => user,
        _ => {
            tracing::warn!("Login failed");
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let token = tokens
        .issue(user.id, &user.full_name, &user.user_type)
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal("the server encountered a problem and could not process your request")
        })?;

    tracing::info!("User {} logged in", user.id);

    Ok(Json(AuthResponse {
        ok: true,
        message: "you have been logged in successfully".to_string(),
        token,
    }))
}
