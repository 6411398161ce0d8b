//! Movie Catalog - Main Library
//!
//! A JSON REST backend for browsing a movie catalog, rating movies and
//! managing user accounts.
//!
//! # Module Structure
//!
//! - **`shared`** - Catalog data structures and the input validator
//! - **`backend`** - Axum server, PostgreSQL data access, authentication
//!
//! # Usage
//!
//! ```rust,no_run
//! use movie_catalog::backend::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
