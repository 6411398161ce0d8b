//! Status Handler

use std::sync::Arc;

use axum::extract::State;

use crate::backend::catalog::handlers::types::AppStatus;
use crate::backend::envelope::Envelope;
use crate::backend::server::config::AppConfig;

/// GET /v1/status
///
/// Always 200, with or without a database.
pub async fn get_status(State(config): State<Arc<AppConfig>>) -> Envelope<AppStatus> {
    Envelope::ok(
        "app_status",
        AppStatus {
            status: "Available".to_string(),
            environment: config.env.clone(),
            version: config.version.clone(),
        },
    )
}
