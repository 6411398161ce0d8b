/**
 * User Model and Database Operations
 *
 * This module handles user records. Emails are stored and looked up in
 * their normalized (trimmed, lower-cased) form.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::database::Database;
use crate::backend::error::DbError;

/// Role assigned to every account created through signup
pub const DEFAULT_USER_TYPE: &str = "user";

/// Role allowed to manage genres
pub const ADMIN_USER_TYPE: &str = "admin";

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i32,
    /// Full name
    #[sqlx(rename = "name")]
    pub full_name: String,
    /// Normalized email address
    pub email: String,
    /// bcrypt hash
    #[serde(skip_serializing)]
    pub password: String,
    /// `user` or `admin`
    pub user_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalize an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Get user by email
///
/// # Arguments
/// * `db` - Database handle
/// * `email` - Normalized email
///
/// # Returns
/// The user, or `DbError::NotFound` if no account uses this email
pub async fn get_user_by_email(db: &Database, email: &str) -> Result<User, DbError> {
    db.run(
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, user_type, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(db.pool()),
    )
    .await
}

/// Create a new user
///
/// Any driver failure, including a duplicate email that slipped past the
/// signup check, is logged and reported as a generic persistence error.
pub async fn insert_user(
    db: &Database,
    full_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<i32, DbError> {
    let now = Utc::now();
    let result = db
        .run(
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO users (name, email, password, user_type, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(full_name)
            .bind(email)
            .bind(password_hash)
            .bind(DEFAULT_USER_TYPE)
            .bind(now)
            .bind(now)
            .fetch_one(db.pool()),
        )
        .await;

    result.map_err(|e| match e {
        DbError::Timeout(_) => e,
        other => {
            tracing::error!("Failed to insert user: {:?}", other);
            DbError::Persistence("failed to save the credentials".to_string())
        }
    })
}
