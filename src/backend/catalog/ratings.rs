/**
 * Rating Queries
 *
 * A user holds at most one rating per movie. Callers look the pair up with
 * `check_rating` and then either update or insert; an insert that loses a
 * race against another insert for the same pair updates that row instead.
 */

use crate::backend::database::Database;
use crate::backend::error::DbError;
use crate::shared::catalog::Rating;

/// Find the id of the user's existing rating for a movie
///
/// # Returns
/// The rating id, or `DbError::NotFound` if the user has not rated the movie
pub async fn check_rating(db: &Database, movie_id: i32, user_id: i32) -> Result<i32, DbError> {
    let id = db
        .run(
            sqlx::query_scalar::<_, i32>(
                "SELECT id FROM ratings WHERE movie_id = $1 AND user_id = $2",
            )
            .bind(movie_id)
            .bind(user_id)
            .fetch_optional(db.pool()),
        )
        .await?;

    id.ok_or(DbError::NotFound)
}

/// Store a new rating and return its id
///
/// If the user already rated the movie, the existing row takes the new score
/// and its id is returned.
pub async fn insert_rating(db: &Database, rating: &Rating) -> Result<i32, DbError> {
    db.run(
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO ratings (movie_id, user_id, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (movie_id, user_id)
            DO UPDATE SET rating = EXCLUDED.rating, updated_at = EXCLUDED.updated_at
            RETURNING id
            "#,
        )
        .bind(rating.movie_id)
        .bind(rating.user_id)
        .bind(rating.rating)
        .bind(rating.created_at)
        .bind(rating.updated_at)
        .fetch_one(db.pool()),
    )
    .await
}

/// Overwrite the score of an existing rating
///
/// # Returns
/// `DbError::NotFound` when no row matched `rating.id`
pub async fn update_rating(db: &Database, rating: &Rating) -> Result<(), DbError> {
    let result = db
        .run(
            sqlx::query(
                r#"
                UPDATE ratings
                SET rating = $1, updated_at = $2
                WHERE id = $3
                "#,
            )
            .bind(rating.rating)
            .bind(rating.updated_at)
            .bind(rating.id)
            .execute(db.pool()),
        )
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
