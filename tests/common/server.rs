//! Test server construction

use axum_test::TestServer;

use movie_catalog::backend::database::Database;
use movie_catalog::backend::routes::create_router;
use movie_catalog::backend::server::state::AppState;

use super::auth_helpers::test_config;

/// Server over the full router, with or without a database
pub fn create_test_server(db: Option<Database>) -> TestServer {
    let app = create_router(AppState::new(test_config(), db));
    TestServer::new(app).expect("Failed to start test server")
}
