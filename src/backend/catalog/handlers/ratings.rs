//! Rating Handler

use axum::extract::State;

use crate::backend::catalog::handlers::IdParam;
use crate::backend::catalog::{movies, ratings};
use crate::backend::database::Database;
use crate::backend::envelope::{Envelope, JsonBody};
use crate::backend::error::{BackendError, DbError};
use crate::backend::middleware::AuthUser;
use crate::shared::catalog::{Rating, RatingRequest, MAX_RATING, MIN_RATING};
use crate::shared::validator::Validator;

/// POST /v1/movie/{id}/rating
///
/// Creates the caller's rating for the movie, or replaces the score of the
/// one they already gave.
pub async fn rate_movie(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
    IdParam(movie_id): IdParam,
    JsonBody(request): JsonBody<RatingRequest>,
) -> Result<Envelope<Rating>, BackendError> {
    let mut v = Validator::new();
    v.check(
        request.rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&request.rating),
        "rating",
        format!("must be between {} and {}", MIN_RATING, MAX_RATING),
    );
    if !v.valid() {
        return Err(BackendError::validation(v.into_errors()));
    }

    let db = Database::require(db)?;
    if !movies::movie_exists(&db, movie_id).await? {
        return Err(BackendError::not_found("movie not found"));
    }

    let mut rating = Rating::new(movie_id, user.user_id, request.rating);
    match ratings::check_rating(&db, movie_id, user.user_id).await {
        Ok(existing) => {
            rating.id = existing;
            ratings::update_rating(&db, &rating).await?;
        }
        Err(DbError::NotFound) => {
            rating.id = ratings::insert_rating(&db, &rating).await?;
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!("User {} rated movie {} with {}", user.user_id, movie_id, rating.rating);
    Ok(Envelope::ok("rating", rating))
}
