//! Database Handle
//!
//! Wraps the PostgreSQL pool together with the per-call deadline. Every data
//! access function takes a `&Database` and runs its queries through
//! [`Database::run`], so no single call can hold a handler longer than the
//! configured timeout.

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;
use tokio::time::timeout;

use crate::backend::error::{BackendError, DbError};

/// Default deadline for a single data access call
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// PostgreSQL pool plus query deadline
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
    query_timeout: Duration,
}

impl Database {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run one data access operation under the query deadline
    ///
    /// The operation may issue several statements; the deadline covers all
    /// of them.
    ///
    /// # Returns
    ///
    /// The operation's result, or `DbError::Timeout` if the deadline passed
    /// first.
    pub async fn run<T, E, F>(&self, operation: F) -> Result<T, DbError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<DbError>,
    {
        match timeout(self.query_timeout, operation).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(DbError::Timeout(self.query_timeout)),
        }
    }

    /// Unwrap the optional database from application state
    ///
    /// A server started without `DATABASE_URL` still serves the status
    /// endpoint; everything else answers 503.
    pub fn require(db: Option<Database>) -> Result<Database, BackendError> {
        db.ok_or_else(|| {
            tracing::error!("Database not configured");
            BackendError::unavailable("the database is not available")
        })
    }
}
