/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /v1/user/signup/.
 *
 * # Registration Process
 *
 * 1. Validate full name, email and password format
 * 2. Check that the email is not already registered
 * 3. Hash password using bcrypt
 * 4. Create user in database
 *
 * No token is issued; the client logs in afterwards.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::passwords::hash_in_background;
use crate::backend::auth::users::{get_user_by_email, insert_user, normalize_email};
use crate::backend::database::Database;
use crate::backend::envelope::{JsonBody, MessageResponse};
use crate::backend::error::{BackendError, DbError};
use crate::shared::validator::{Validator, FULL_NAME_MAX_LEN, FULL_NAME_MIN_LEN};

/// Run the format rules over a signup request
pub fn validate_signup(request: &SignupRequest) -> Validator {
    let full_name = request.full_name.trim();
    let email = normalize_email(&request.email);

    let mut v = Validator::new();
    if v.required("full_name", full_name) {
        v.is_length("full_name", full_name, FULL_NAME_MIN_LEN, FULL_NAME_MAX_LEN);
        v.is_valid_full_name("full_name", full_name);
    }
    if v.required("email", &email) {
        v.is_email("email", &email);
    }
    if v.required("password", &request.password) {
        v.is_valid_password("password", &request.password);
    }
    v
}

/// Sign up handler
///
/// # Arguments
///
/// * `State(db)` - Optional database
/// * `JsonBody(request)` - Signup request
///
/// # Returns
///
/// 201 with `{ "ok": true, "message": ... }`
///
/// # Errors
///
/// * `400 Bad Request` - Field errors as a raw `{ field: message }` map,
///   including an already registered email
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /v1/user/signup/ HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "full_name": "Jane Doe",
///   "email": "jane@example.com",
///   "password": "password123"
/// }
/// ```
pub async fn signup(
    State(db): State<Option<Database>>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let mut v = validate_signup(&request);
    if !v.valid() {
        tracing::warn!("Signup rejected: {:?}", v.errors());
        return Err(BackendError::validation(v.into_errors()));
    }

    let db = Database::require(db)?;
    let email = normalize_email(&request.email);

    match get_user_by_email(&db, &email).await {
        Ok(_) => {
            v.add_error("email", "a user with this email address already exists");
        }
        Err(DbError::NotFound) => {}
        Err(e) => {
            tracing::error!("Failed to check existing user during signup: {:?}", e);
            return Err(e.into());
        }
    }

    if !v.valid() {
        tracing::warn!("Signup rejected for existing email");
        return Err(BackendError::validation(v.into_errors()));
    }

    let password_hash = hash_in_background(request.password).await.map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::internal("the server encountered a problem and could not process your request")
    })?;

    let user_id = insert_user(&db, request.full_name.trim(), &email, &password_hash).await?;

    tracing::info!("User {} signed up", user_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("your account was created successfully")),
    ))
}
