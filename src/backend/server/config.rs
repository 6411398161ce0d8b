/**
 * Server Configuration
 *
 * This module loads the immutable `AppConfig` from environment variables and
 * opens the optional PostgreSQL database.
 *
 * # Configuration Sources
 *
 * | Variable                | Default                  |
 * |-------------------------|--------------------------|
 * | `SERVER_PORT`           | `4000`                   |
 * | `APP_ENV`               | `development`            |
 * | `DATABASE_URL`          | unset (no database)      |
 * | `JWT_SECRET`            | dev secret, not in prod  |
 * | `JWT_ISSUER`            | `movies.local`           |
 * | `JWT_AUDIENCE`          | `movies.local`           |
 * | `CLOUD_NAME`            | unset (placeholder URLs) |
 * | `DB_QUERY_TIMEOUT_MS`   | `3000`                   |
 * | `MOVIES_SEARCH_DEFAULT` | `the`                    |
 * | `MOVIES_PAGE_SIZE`      | `2`                      |
 * | `MOVIES_PAGE_OFFSET`    | `1`                      |
 *
 * # Error Handling
 *
 * A malformed value is a startup error. A database that cannot be reached
 * is logged and the server starts without one.
 */

use std::env;
use std::str::FromStr;
use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::sessions::{TokenConfig, TOKEN_TTL};
use crate::backend::database::{Database, DEFAULT_QUERY_TIMEOUT};

const DEV_JWT_SECRET: &str = "development-secret-change-in-production";
const PRODUCTION_ENV: &str = "production";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0} must be set when APP_ENV=production")]
    Missing(&'static str),
}

/// Defaults for `GET /v1/movies` when the query string leaves them out
#[derive(Debug, Clone, PartialEq)]
pub struct MovieListing {
    pub search: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for MovieListing {
    fn default() -> Self {
        Self {
            search: "the".to_string(),
            limit: 2,
            offset: 1,
        }
    }
}

/// Application configuration
///
/// Built once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Environment name reported by the status endpoint
    pub env: String,
    pub version: String,
    pub database_url: Option<String>,
    pub token: TokenConfig,
    /// Image CDN account; `None` serves placeholder images only
    pub cloud_name: Option<String>,
    pub query_timeout: Duration,
    pub movie_listing: MovieListing,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            env: "development".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database_url: None,
            token: TokenConfig {
                secret: DEV_JWT_SECRET.to_string(),
                issuer: "movies.local".to_string(),
                audience: "movies.local".to_string(),
                ttl: TOKEN_TTL,
            },
            cloud_name: None,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            movie_listing: MovieListing::default(),
        }
    }
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder {
            config: AppConfig::default(),
        }
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unparsable numbers and
    /// `ConfigError::Missing` when `JWT_SECRET` is unset in production.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let env_name = env::var("APP_ENV").unwrap_or(defaults.env);

        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if env_name == PRODUCTION_ENV => return Err(ConfigError::Missing("JWT_SECRET")),
            _ => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                defaults.token.secret
            }
        };

        let timeout_ms = parse_var("DB_QUERY_TIMEOUT_MS", defaults.query_timeout.as_millis() as u64)?;

        Ok(Self {
            port: parse_var("SERVER_PORT", defaults.port)?,
            env: env_name,
            version: defaults.version,
            database_url: optional_var("DATABASE_URL"),
            token: TokenConfig {
                secret,
                issuer: env::var("JWT_ISSUER").unwrap_or(defaults.token.issuer),
                audience: env::var("JWT_AUDIENCE").unwrap_or(defaults.token.audience),
                ttl: defaults.token.ttl,
            },
            cloud_name: optional_var("CLOUD_NAME"),
            query_timeout: Duration::from_millis(timeout_ms),
            movie_listing: MovieListing {
                search: env::var("MOVIES_SEARCH_DEFAULT").unwrap_or(defaults.movie_listing.search),
                limit: parse_var("MOVIES_PAGE_SIZE", defaults.movie_listing.limit)?,
                offset: parse_var("MOVIES_PAGE_OFFSET", defaults.movie_listing.offset)?,
            },
        })
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}

/// Builder used by tests and embedders
#[derive(Debug, Clone)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.config.env = env.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.token.secret = secret.into();
        self
    }

    pub fn cloud_name(mut self, cloud_name: impl Into<String>) -> Self {
        self.config.cloud_name = Some(cloud_name.into());
        self
    }

    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.config.query_timeout = timeout;
        self
    }

    pub fn movie_listing(mut self, listing: MovieListing) -> Self {
        self.config.movie_listing = listing;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

/// Load and initialize the database
///
/// This function:
/// 1. Connects to `database_url`
/// 2. Runs the embedded migrations
///
/// # Returns
///
/// - `Some(Database)` if the database is reachable
/// - `None` if no URL is configured or the connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. Data routes answer
/// 503 while the database is missing.
pub async fn load_database(config: &AppConfig) -> Option<Database> {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(Database::new(pool, config.query_timeout))
}
