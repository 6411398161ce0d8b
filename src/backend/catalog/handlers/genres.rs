/**
 * Genre Handlers
 *
 * Reads are public. Creating, renaming and deleting a genre require a
 * token with the `admin` role.
 */

use axum::extract::State;

use crate::backend::catalog::genres;
use crate::backend::catalog::handlers::IdParam;
use crate::backend::database::Database;
use crate::backend::envelope::{Envelope, JsonBody, MessageResponse};
use crate::backend::error::{BackendError, DbError};
use crate::backend::middleware::AuthUser;
use crate::shared::catalog::{Genre, GenreRequest};
use crate::shared::validator::Validator;

pub const GENRE_NAME_MIN_LEN: usize = 2;
pub const GENRE_NAME_MAX_LEN: usize = 50;

fn validate_genre(request: &GenreRequest) -> Result<String, BackendError> {
    let name = request.genre_name.trim();
    let mut v = Validator::new();
    if v.required("genre_name", name) {
        v.is_length("genre_name", name, GENRE_NAME_MIN_LEN, GENRE_NAME_MAX_LEN);
    }
    if !v.valid() {
        return Err(BackendError::validation(v.into_errors()));
    }
    Ok(name.to_string())
}

fn genre_lookup_failed(e: DbError) -> BackendError {
    match e {
        DbError::NotFound => BackendError::not_found("genre not found"),
        other => other.into(),
    }
}

pub async fn list_genres(
    State(db): State<Option<Database>>,
) -> Result<Envelope<Vec<Genre>>, BackendError> {
    let db = Database::require(db)?;
    let genres = genres::list_genres(&db).await?;
    Ok(Envelope::ok("genres", genres))
}

pub async fn get_genre(
    State(db): State<Option<Database>>,
    IdParam(id): IdParam,
) -> Result<Envelope<Genre>, BackendError> {
    let db = Database::require(db)?;
    let genre = genres::get_genre(&db, id).await.map_err(genre_lookup_failed)?;
    Ok(Envelope::ok("genre", genre))
}

/// POST /v1/genres (admin)
pub async fn create_genre(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<GenreRequest>,
) -> Result<Envelope<Genre>, BackendError> {
    user.require_admin()?;
    let name = validate_genre(&request)?;
    let db = Database::require(db)?;

    let id = genres::insert_genre(&db, &name).await?;
    let genre = genres::get_genre(&db, id).await?;

    tracing::info!("User {} created genre {}", user.user_id, id);
    Ok(Envelope::created("genre", genre))
}

/// PUT /v1/genres/{id} (admin)
pub async fn update_genre(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
    IdParam(id): IdParam,
    JsonBody(request): JsonBody<GenreRequest>,
) -> Result<Envelope<Genre>, BackendError> {
    user.require_admin()?;
    let name = validate_genre(&request)?;
    let db = Database::require(db)?;

    genres::update_genre(&db, id, &name).await?;
    let genre = genres::get_genre(&db, id).await.map_err(genre_lookup_failed)?;

    tracing::info!("User {} renamed genre {}", user.user_id, id);
    Ok(Envelope::ok("genre", genre))
}

/// DELETE /v1/genres/{id} (admin)
///
/// Deleting a genre that does not exist succeeds.
pub async fn delete_genre(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
    IdParam(id): IdParam,
) -> Result<axum::Json<MessageResponse>, BackendError> {
    user.require_admin()?;
    let db = Database::require(db)?;

    genres::delete_genre(&db, id).await?;

    tracing::info!("User {} deleted genre {}", user.user_id, id);
    Ok(axum::Json(MessageResponse::ok("genre successfully deleted")))
}
