//! Middleware Module
//!
//! - **`auth`** - Bearer token extractors (`AuthUser`, `Option<AuthUser>`)
//! - **`cors`** - Permissive CORS headers and preflight handling

/// Authentication extractors
pub mod auth;

/// CORS middleware
pub mod cors;

pub use auth::{AuthUser, AuthenticatedUser};
pub use cors::enable_cors;
