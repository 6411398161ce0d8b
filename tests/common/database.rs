//! Database test fixtures and utilities
//!
//! Database-backed tests need `DATABASE_URL` pointing at a disposable
//! PostgreSQL database. Without it `TestDatabase::connect` returns `None`
//! and the test returns early.

use std::time::Duration;

use chrono::NaiveDate;
use sqlx::PgPool;

use movie_catalog::backend::database::Database;

/// Test database fixture
///
/// Every `connect` empties all catalog tables, so tests using it must run
/// under `#[serial]`.
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect, migrate and clean, or `None` when no database is configured
    pub async fn connect() -> Option<Self> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("DATABASE_URL not set; skipping database test");
                return None;
            }
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create test database pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let db = Self { pool };
        db.cleanup().await.expect("Failed to clean test database");
        Some(db)
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Handle with the default query timeout
    pub fn database(&self) -> Database {
        Database::new(self.pool.clone(), Duration::from_secs(3))
    }

    /// Remove all rows while preserving the schema
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "TRUNCATE TABLE favorites, comments, ratings, movies_genres, genres, movies, users RESTART IDENTITY CASCADE",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn seed_movie(&self, title: &str, description: &str, image: Option<&str>) -> i32 {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO movies (title, description, year, release_date, runtime, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(1999)
        .bind(NaiveDate::from_ymd_opt(1999, 3, 31).unwrap())
        .bind(136)
        .bind(image)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to seed movie")
    }

    pub async fn seed_genre(&self, name: &str) -> i32 {
        sqlx::query_scalar::<_, i32>("INSERT INTO genres (genre_name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to seed genre")
    }

    pub async fn link_genre(&self, movie_id: i32, genre_id: i32) {
        sqlx::query("INSERT INTO movies_genres (movie_id, genre_id) VALUES ($1, $2)")
            .bind(movie_id)
            .bind(genre_id)
            .execute(&self.pool)
            .await
            .expect("Failed to link genre");
    }

    pub async fn seed_user(&self, name: &str, email: &str) -> i32 {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, 'not-a-hash') RETURNING id",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to seed user")
    }

    pub async fn seed_rating(&self, movie_id: i32, user_id: i32, rating: f32) {
        sqlx::query("INSERT INTO ratings (movie_id, user_id, rating) VALUES ($1, $2, $3)")
            .bind(movie_id)
            .bind(user_id)
            .bind(rating)
            .execute(&self.pool)
            .await
            .expect("Failed to seed rating");
    }

    pub async fn seed_comment(&self, movie_id: i32, user_id: i32, comment: &str) {
        sqlx::query("INSERT INTO comments (movie_id, user_id, comment) VALUES ($1, $2, $3)")
            .bind(movie_id)
            .bind(user_id)
            .bind(comment)
            .execute(&self.pool)
            .await
            .expect("Failed to seed comment");
    }

    pub async fn seed_favorite(&self, movie_id: i32, user_id: i32) {
        sqlx::query("INSERT INTO favorites (movie_id, user_id) VALUES ($1, $2)")
            .bind(movie_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .expect("Failed to seed favorite");
    }
}
