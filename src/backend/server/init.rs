/**
 * Server Initialization
 *
 * This module builds the application: it opens the optional database,
 * assembles `AppState` and hands it to the router.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Loaded configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// A missing or unreachable database does not stop startup; data routes
/// answer 503 until the server is restarted with a working database.
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!(
        "Initializing movie catalog backend ({} environment)",
        config.env
    );

    let db = load_database(&config).await;
    let app_state = AppState::new(config, db);

    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
