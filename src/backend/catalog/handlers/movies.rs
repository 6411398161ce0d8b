/**
 * Movie Handlers
 *
 * - `list_movies` - GET /v1/movies
 * - `list_all_movies` - GET /v1/movies/all
 * - `list_latest_movies` - GET /v1/movies/latest
 * - `list_movies_by_genre` - GET /v1/movies/genre/{genre_id}
 * - `get_movie` - GET /v1/movie/{id}
 */

use std::sync::Arc;

use axum::extract::{rejection::QueryRejection, Query, State};

use crate::backend::catalog::genres::get_genre;
use crate::backend::catalog::handlers::IdParam;
use crate::backend::catalog::handlers::types::MovieListParams;
use crate::backend::catalog::images::ImageResolver;
use crate::backend::catalog::movies;
use crate::backend::database::Database;
use crate::backend::envelope::Envelope;
use crate::backend::error::{BackendError, DbError};
use crate::backend::middleware::AuthUser;
use crate::backend::server::config::AppConfig;
use crate::shared::catalog::Movie;
use crate::shared::validator::Validator;

/// Largest page a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Search the catalog
///
/// `search`, `limit` and `offset` override the configured defaults.
pub async fn list_movies(
    State(db): State<Option<Database>>,
    State(config): State<Arc<AppConfig>>,
    params: Result<Query<MovieListParams>, QueryRejection>,
) -> Result<Envelope<Vec<Movie>>, BackendError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!("Rejected movie query string: {}", rejection.body_text());
        BackendError::bad_request("invalid query parameters")
    })?;
    let defaults = &config.movie_listing;
    let search = params.search.unwrap_or_else(|| defaults.search.clone());
    let limit = params.limit.unwrap_or(defaults.limit);
    let offset = params.offset.unwrap_or(defaults.offset);

    let mut v = Validator::new();
    v.check(
        (1..=MAX_PAGE_SIZE).contains(&limit),
        "limit",
        format!("must be between 1 and {}", MAX_PAGE_SIZE),
    );
    v.check(offset >= 0, "offset", "must not be negative");
    if !v.valid() {
        return Err(BackendError::validation(v.into_errors()));
    }

    let db = Database::require(db)?;
    let movies = movies::list_movies(&db, search.trim(), limit, offset)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list movies: {:?}", e);
            BackendError::from(e)
        })?;

    Ok(Envelope::ok("movies", movies))
}

pub async fn list_all_movies(
    State(db): State<Option<Database>>,
) -> Result<Envelope<Vec<Movie>>, BackendError> {
    let db = Database::require(db)?;
    let movies = movies::list_all_movies(&db).await?;
    Ok(Envelope::ok("movies", movies))
}

/// The five most recently updated movies
///
/// A valid bearer token fills in each movie's `is_favorite` flag.
pub async fn list_latest_movies(
    State(db): State<Option<Database>>,
    State(images): State<ImageResolver>,
    user: Option<AuthUser>,
) -> Result<Envelope<Vec<Movie>>, BackendError> {
    let db = Database::require(db)?;
    let user_id = user.map(|AuthUser(user)| user.user_id);
    let movies = movies::list_latest_movies(&db, &images, user_id).await?;
    Ok(Envelope::ok("movies", movies))
}

/// Fetch one movie with comments, ratings and favorites
///
/// # Errors
///
/// * `400 Bad Request` - Non-numeric id, or any data error other than a
///   missing row
/// * `404 Not Found` - No movie with this id
pub async fn get_movie(
    State(db): State<Option<Database>>,
    State(images): State<ImageResolver>,
    IdParam(id): IdParam,
) -> Result<Envelope<Movie>, BackendError> {
    let db = Database::require(db)?;

    let movie = movies::get_movie(&db, &images, id).await.map_err(|e| match e {
        DbError::NotFound => BackendError::not_found("movie not found"),
        other => {
            tracing::error!("Failed to fetch movie {}: {:?}", id, other);
            BackendError::bad_request("could not fetch the requested movie")
        }
    })?;

    Ok(Envelope::ok("movie", movie))
}

/// Movies tagged with a genre
///
/// # Errors
///
/// * `400 Bad Request` - Non-numeric id, or a data error
/// * `404 Not Found` - No genre with this id
pub async fn list_movies_by_genre(
    State(db): State<Option<Database>>,
    State(images): State<ImageResolver>,
    IdParam(genre_id): IdParam,
) -> Result<Envelope<Vec<Movie>>, BackendError> {
    let db = Database::require(db)?;

    let lookup_failed = |e: DbError| match e {
        DbError::NotFound => BackendError::not_found("genre not found"),
        other => {
            tracing::error!("Failed to list movies for genre {}: {:?}", genre_id, other);
            BackendError::bad_request("could not fetch movies for the requested genre")
        }
    };

    get_genre(&db, genre_id).await.map_err(&lookup_failed)?;
    let movies = movies::list_movies_by_genre(&db, &images, genre_id)
        .await
        .map_err(&lookup_failed)?;

    Ok(Envelope::ok("movies", movies))
}
