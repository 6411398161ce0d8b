/**
 * Movie Catalog Server Entry Point
 *
 * Loads `.env`, initializes tracing and serves the API.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    let config = movie_catalog::backend::AppConfig::from_env()?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = movie_catalog::backend::create_app(config).await;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
