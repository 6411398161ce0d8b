/**
 * Movie Queries
 *
 * Read-only access to the movie catalog. Average ratings are computed in SQL
 * (one decimal place, 1.0 for unrated movies); genre mappings are loaded
 * with one batched query per listing.
 */

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::backend::catalog::images::ImageResolver;
use crate::backend::database::Database;
use crate::backend::error::DbError;
use crate::shared::catalog::{
    dedup_highest_rated, genre_map_from_arrays, genre_maps_by_movie, Comment, Favorite, Genre,
    GenreMap, Movie, MovieGenre, Rating, PLACEHOLDER_IMAGE_URL,
};

/// Number of movies returned by the latest listing
pub const LATEST_MOVIES_LIMIT: i64 = 5;

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: i32,
    title: String,
    description: String,
    year: i32,
    release_date: NaiveDate,
    runtime: i32,
    image: Option<String>,
    rating: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MovieRow {
    fn into_movie(self, image: String) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            description: self.description,
            year: self.year,
            release_date: self.release_date,
            runtime: self.runtime,
            rating: self.rating,
            ratings: Vec::new(),
            total_favorites: 0,
            is_favorite: false,
            favorites: Vec::new(),
            total_comments: 0,
            comments: Vec::new(),
            genres: GenreMap::new(),
            image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Escape `%`, `_` and `\` so a search term matches literally under ILIKE
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Load the genre mapping of every movie in `movie_ids` with one query
async fn genre_maps(pool: &PgPool, movie_ids: &[i32]) -> Result<HashMap<i32, GenreMap>, sqlx::Error> {
    #[derive(sqlx::FromRow)]
    struct MovieGenreRow {
        id: i32,
        movie_id: i32,
        genre_id: i32,
        genre_name: String,
        genre_created_at: DateTime<Utc>,
        genre_updated_at: DateTime<Utc>,
    }

    let rows = sqlx::query_as::<_, MovieGenreRow>(
        r#"
        SELECT mg.id, mg.movie_id, mg.genre_id, g.genre_name,
               g.created_at AS genre_created_at, g.updated_at AS genre_updated_at
        FROM movies_genres mg
        JOIN genres g ON g.id = mg.genre_id
        WHERE mg.movie_id = ANY($1)
        "#,
    )
    .bind(movie_ids)
    .fetch_all(pool)
    .await?;

    Ok(genre_maps_by_movie(rows.into_iter().map(|row| MovieGenre {
        id: row.id,
        movie_id: row.movie_id,
        genre_id: row.genre_id,
        genre: Genre {
            id: row.genre_id,
            genre_name: row.genre_name,
            created_at: row.genre_created_at,
            updated_at: row.genre_updated_at,
        },
    })))
}

async fn attach_genres(pool: &PgPool, movies: &mut [Movie]) -> Result<(), sqlx::Error> {
    let ids: Vec<i32> = movies.iter().map(|m| m.id).collect();
    let mut maps = genre_maps(pool, &ids).await?;
    for movie in movies.iter_mut() {
        movie.genres = maps.remove(&movie.id).unwrap_or_default();
    }
    Ok(())
}

/// Search movies by title or description
///
/// # Arguments
/// * `db` - Database handle
/// * `term` - Case-insensitive substring to look for
/// * `limit` - Page size
/// * `offset` - Rows to skip
///
/// # Returns
/// Matching movies ordered by average rating, highest first
pub async fn list_movies(
    db: &Database,
    term: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Movie>, DbError> {
    let pattern = format!("%{}%", escape_like(term));
    db.run(async {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT m.id, m.title, m.description, m.year, m.release_date, m.runtime, m.image,
                   m.created_at, m.updated_at,
                   COALESCE(ROUND(AVG(r.rating)::numeric, 1), 1.0)::float8 AS rating
            FROM movies m
            LEFT JOIN ratings r ON r.movie_id = m.id
            WHERE m.title ILIKE $1 OR m.description ILIKE $1
            GROUP BY m.id
            ORDER BY rating DESC, m.id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(db.pool())
        .await?;

        let mut movies: Vec<Movie> = rows
            .into_iter()
            .map(|row| row.into_movie(PLACEHOLDER_IMAGE_URL.to_string()))
            .collect();
        attach_genres(db.pool(), &mut movies).await?;
        Ok::<_, sqlx::Error>(movies)
    })
    .await
}

/// Every movie in the catalog, ordered by id
pub async fn list_all_movies(db: &Database) -> Result<Vec<Movie>, DbError> {
    db.run(async {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT m.id, m.title, m.description, m.year, m.release_date, m.runtime, m.image,
                   m.created_at, m.updated_at,
                   COALESCE(ROUND(AVG(r.rating)::numeric, 1), 1.0)::float8 AS rating
            FROM movies m
            LEFT JOIN ratings r ON r.movie_id = m.id
            GROUP BY m.id
            ORDER BY m.id ASC
            "#,
        )
        .fetch_all(db.pool())
        .await?;

        let mut movies: Vec<Movie> = rows
            .into_iter()
            .map(|row| row.into_movie(PLACEHOLDER_IMAGE_URL.to_string()))
            .collect();
        attach_genres(db.pool(), &mut movies).await?;
        Ok::<_, sqlx::Error>(movies)
    })
    .await
}

/// Check whether a movie exists
pub async fn movie_exists(db: &Database, id: i32) -> Result<bool, DbError> {
    db.run(
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(db.pool()),
    )
    .await
}

/// One movie with its full detail
///
/// Loads the favorites count, genres, comments (newest first, with the
/// commenter's name), ratings and favorites.
///
/// # Returns
/// The movie, or `DbError::NotFound` if no movie has this id
pub async fn get_movie(db: &Database, images: &ImageResolver, id: i32) -> Result<Movie, DbError> {
    #[derive(sqlx::FromRow)]
    struct CommentRow {
        id: i32,
        user_id: i32,
        user_name: Option<String>,
        movie_id: i32,
        comment: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    #[derive(sqlx::FromRow)]
    struct RatingRow {
        id: i32,
        movie_id: i32,
        user_id: i32,
        rating: f32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    #[derive(sqlx::FromRow)]
    struct FavoriteRow {
        id: i32,
        user_id: i32,
        movie_id: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    db.run(async {
        let pool = db.pool();

        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT m.id, m.title, m.description, m.year, m.release_date, m.runtime, m.image,
                   m.created_at, m.updated_at,
                   COALESCE(ROUND(AVG(r.rating)::numeric, 1), 1.0)::float8 AS rating
            FROM movies m
            LEFT JOIN ratings r ON r.movie_id = m.id
            WHERE m.id = $1
            GROUP BY m.id
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        let image = images.resolve(row.image.as_deref());
        let mut movie = row.into_movie(image);

        movie.total_favorites =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites WHERE movie_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;

        movie.genres = genre_maps(pool, &[id]).await?.remove(&id).unwrap_or_default();

        movie.comments = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.user_id, u.name AS user_name, c.movie_id, c.comment,
                   c.created_at, c.updated_at
            FROM comments c
            LEFT JOIN users u ON u.id = c.user_id
            WHERE c.movie_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|c| Comment {
            id: c.id,
            user_id: c.user_id,
            user_name: c.user_name.unwrap_or_default(),
            movie_id: c.movie_id,
            comment: c.comment,
            created_at: c.created_at,
            updated_at: c.updated_at,
        })
        .collect();
        movie.total_comments = movie.comments.len() as i64;

        movie.ratings = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, movie_id, user_id, rating, created_at, updated_at
            FROM ratings
            WHERE movie_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|r| Rating {
            id: r.id,
            movie_id: r.movie_id,
            user_id: r.user_id,
            rating: r.rating,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
        .collect();

        movie.favorites = sqlx::query_as::<_, FavoriteRow>(
            r#"
            SELECT id, user_id, movie_id, created_at, updated_at
            FROM favorites
            WHERE movie_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|f| Favorite {
            id: f.id,
            user_id: f.user_id,
            movie_id: f.movie_id,
            created_at: f.created_at,
            updated_at: f.updated_at,
        })
        .collect();

        Ok::<_, sqlx::Error>(movie)
    })
    .await
}

/// Movies tagged with a genre
///
/// Each movie carries its complete genre mapping, not only the requested
/// genre.
pub async fn list_movies_by_genre(
    db: &Database,
    images: &ImageResolver,
    genre_id: i32,
) -> Result<Vec<Movie>, DbError> {
    #[derive(sqlx::FromRow)]
    struct GenreMovieRow {
        #[sqlx(flatten)]
        movie: MovieRow,
        genre_ids: Vec<i32>,
        genre_names: Vec<String>,
    }

    let rows = db
        .run(
            sqlx::query_as::<_, GenreMovieRow>(
                r#"
                SELECT m.id, m.title, m.description, m.year, m.release_date, m.runtime, m.image,
                       m.created_at, m.updated_at,
                       COALESCE(ROUND(AVG(r.rating)::numeric, 1), 1.0)::float8 AS rating,
                       ARRAY(
                           SELECT g.id FROM movies_genres mg JOIN genres g ON g.id = mg.genre_id
                           WHERE mg.movie_id = m.id ORDER BY g.id
                       ) AS genre_ids,
                       ARRAY(
                           SELECT g.genre_name FROM movies_genres mg JOIN genres g ON g.id = mg.genre_id
                           WHERE mg.movie_id = m.id ORDER BY g.id
                       ) AS genre_names
                FROM movies m
                LEFT JOIN ratings r ON r.movie_id = m.id
                WHERE EXISTS (
                    SELECT 1 FROM movies_genres mg WHERE mg.movie_id = m.id AND mg.genre_id = $1
                )
                GROUP BY m.id
                ORDER BY m.id ASC
                "#,
            )
            .bind(genre_id)
            .fetch_all(db.pool()),
        )
        .await?;

    let movies = rows
        .into_iter()
        .map(|row| {
            let image = images.resolve(row.movie.image.as_deref());
            let mut movie = row.movie.into_movie(image);
            movie.genres = genre_map_from_arrays(row.genre_ids, row.genre_names);
            movie
        })
        .collect();

    Ok(dedup_highest_rated(movies))
}

/// The most recently updated movies
///
/// With a user id each movie's `is_favorite` flag reflects that user's
/// favorites; without one it stays `false`.
pub async fn list_latest_movies(
    db: &Database,
    images: &ImageResolver,
    user_id: Option<i32>,
) -> Result<Vec<Movie>, DbError> {
    db.run(async {
        let pool = db.pool();
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT m.id, m.title, m.description, m.year, m.release_date, m.runtime, m.image,
                   m.created_at, m.updated_at,
                   COALESCE(ROUND(AVG(r.rating)::numeric, 1), 1.0)::float8 AS rating
            FROM movies m
            LEFT JOIN ratings r ON r.movie_id = m.id
            GROUP BY m.id
            ORDER BY m.updated_at DESC, m.id DESC
            LIMIT $1
            "#,
        )
        .bind(LATEST_MOVIES_LIMIT)
        .fetch_all(pool)
        .await?;

        let mut movies: Vec<Movie> = rows
            .into_iter()
            .map(|row| {
                let image = images.resolve(row.image.as_deref());
                row.into_movie(image)
            })
            .collect();
        attach_genres(pool, &mut movies).await?;

        if let Some(user_id) = user_id {
            for movie in movies.iter_mut() {
                movie.is_favorite = sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM favorites WHERE movie_id = $1 AND user_id = $2)",
                )
                .bind(movie.id)
                .bind(user_id)
                .fetch_one(pool)
                .await?;
            }
        }

        Ok::<_, sqlx::Error>(movies)
    })
    .await
}
