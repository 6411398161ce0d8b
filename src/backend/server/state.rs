/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is immutable after startup and cheap to clone:
 * - `Arc<AppConfig>` for the loaded configuration
 * - `Option<Database>` for the pool (absent when `DATABASE_URL` is unset)
 * - `TokenIssuer` for signing and verifying session tokens
 * - `ImageResolver` for movie image URLs
 *
 * # Example
 *
 * ```rust
 * use movie_catalog::backend::database::Database;
 * use axum::extract::State;
 *
 * async fn handler(State(db): State<Option<Database>>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::catalog::images::ImageResolver;
use crate::backend::database::Database;
use crate::backend::server::config::AppConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    /// Database handle
    ///
    /// This is `None` if the database is not configured. Handlers go
    /// through `Database::require`, which answers 503.
    pub db: Option<Database>,

    pub tokens: TokenIssuer,

    pub images: ImageResolver,
}

impl AppState {
    /// Build the state from configuration and an already opened database
    pub fn new(config: AppConfig, db: Option<Database>) -> Self {
        let tokens = TokenIssuer::new(&config.token);
        let images = ImageResolver::new(config.cloud_name.clone());
        Self {
            config: Arc::new(config),
            db,
            tokens,
            images,
        }
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Implement FromRef for Option<Database>
///
/// This allows Axum handlers to extract the optional database
/// directly from `AppState`.
impl FromRef<AppState> for Option<Database> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for ImageResolver {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.images.clone()
    }
}
