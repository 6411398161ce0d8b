//! Backend Module
//!
//! This module contains all server-side code for the movie catalog: an Axum
//! HTTP server backed by PostgreSQL.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`catalog`** - Movie, genre and rating queries and handlers
//! - **`auth`** - Users, passwords, session tokens, signup and login
//! - **`middleware`** - Bearer token extraction and CORS
//! - **`envelope`** - Strict JSON bodies and enveloped responses
//! - **`database`** - Pool handle with per-call deadline
//! - **`error`** - Backend-specific error types
//!
//! # Request Flow
//!
//! ```text
//! Router → Handler → (Validator, data access) → Envelope
//! ```
//!
//! Each request is independent. Handlers share an immutable `AppState` and
//! never hold state between requests.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Movie catalog
pub mod catalog;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// JSON request and response helpers
pub mod envelope;

/// Database handle
pub mod database;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::{BackendError, DbError};
pub use server::{create_app, AppConfig, AppState};
