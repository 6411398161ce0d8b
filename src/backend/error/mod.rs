//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - DbError and BackendError definitions
//! └── conversion.rs - IntoResponse and DbError -> BackendError
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use movie_catalog::backend::error::BackendError;
//! use axum::response::Response;
//!
//! # async fn example() -> Result<Response, BackendError> {
//! Err(BackendError::bad_request("invalid id parameter"))
//! # }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, DbError};
