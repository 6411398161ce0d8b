/**
 * API Routes
 *
 * This module registers every `/v1` endpoint.
 *
 * # Public Routes
 *
 * - `GET /v1/status`
 * - `GET /v1/movies`, `/v1/movies/all`, `/v1/movies/latest`
 * - `GET /v1/movies/genre/{genre_id}`, `/v1/movie/{id}`
 * - `GET /v1/genres`, `/v1/genres/{id}`
 * - `POST /v1/user/signup/`, `/v1/user/login/`
 *
 * # Authenticated Routes
 *
 * - `POST /v1/movie/{id}/rating`
 * - `POST /v1/genres`, `PUT|DELETE /v1/genres/{id}` (admin)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{login, signup};
use crate::backend::catalog::handlers::{genres, movies, ratings, status};
use crate::backend::server::state::AppState;

/// Configure API routes on the router
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes added
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/v1/status", get(status::get_status))
        .route("/v1/movies", get(movies::list_movies))
        .route("/v1/movies/all", get(movies::list_all_movies))
        .route("/v1/movies/latest", get(movies::list_latest_movies))
        .route(
            "/v1/movies/genre/{genre_id}",
            get(movies::list_movies_by_genre),
        )
        .route("/v1/movie/{id}", get(movies::get_movie))
        .route("/v1/movie/{id}/rating", post(ratings::rate_movie))
        .route(
            "/v1/genres",
            get(genres::list_genres).post(genres::create_genre),
        )
        .route(
            "/v1/genres/{id}",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
        .route("/v1/user/signup/", post(signup))
        .route("/v1/user/login/", post(login))
}
