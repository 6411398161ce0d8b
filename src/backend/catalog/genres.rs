/**
 * Genre Queries
 *
 * CRUD over the `genres` table. Updates and deletes do not report whether a
 * row matched.
 */

use chrono::Utc;

use crate::backend::database::Database;
use crate::backend::error::DbError;
use crate::shared::catalog::Genre;

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: i32,
    genre_name: String,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Genre {
            id: row.id,
            genre_name: row.genre_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// All genres ordered by id
pub async fn list_genres(db: &Database) -> Result<Vec<Genre>, DbError> {
    let rows = db
        .run(
            sqlx::query_as::<_, GenreRow>(
                r#"
                SELECT id, genre_name, created_at, updated_at
                FROM genres
                ORDER BY id ASC
                "#,
            )
            .fetch_all(db.pool()),
        )
        .await?;

    Ok(rows.into_iter().map(Genre::from).collect())
}

/// Get genre by ID
///
/// # Returns
/// The genre, or `DbError::NotFound`
pub async fn get_genre(db: &Database, id: i32) -> Result<Genre, DbError> {
    let row = db
        .run(
            sqlx::query_as::<_, GenreRow>(
                r#"
                SELECT id, genre_name, created_at, updated_at
                FROM genres
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_one(db.pool()),
        )
        .await?;

    Ok(row.into())
}

/// Create a genre and return its id
pub async fn insert_genre(db: &Database, genre_name: &str) -> Result<i32, DbError> {
    let now = Utc::now();
    db.run(
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO genres (genre_name, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(genre_name)
        .bind(now)
        .bind(now)
        .fetch_one(db.pool()),
    )
    .await
}

/// Rename a genre
pub async fn update_genre(db: &Database, id: i32, genre_name: &str) -> Result<(), DbError> {
    db.run(
        sqlx::query(
            r#"
            UPDATE genres
            SET genre_name = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(genre_name)
        .bind(Utc::now())
        .bind(id)
        .execute(db.pool()),
    )
    .await?;

    Ok(())
}

/// Delete a genre; its movie associations cascade
pub async fn delete_genre(db: &Database, id: i32) -> Result<(), DbError> {
    db.run(
        sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(db.pool()),
    )
    .await?;

    Ok(())
}
