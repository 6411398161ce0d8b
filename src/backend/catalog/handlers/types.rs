//! Catalog Handler Types

use serde::{Deserialize, Serialize};

/// Query string of `GET /v1/movies`
///
/// Missing values fall back to the configured listing defaults.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Payload of `GET /v1/status`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AppStatus {
    pub status: String,
    pub environment: String,
    pub version: String,
}
