//! Shared Module
//!
//! This module contains the catalog data structures and the input validator.
//! None of it touches HTTP or the database, so everything here is usable from
//! handlers, the data layer and tests alike.

/// Movie catalog data structures
pub mod catalog;

/// Rule-based input validation
pub mod validator;

/// Re-export commonly used types for convenience
pub use catalog::{Comment, Favorite, Genre, GenreMap, Movie, MovieGenre, Rating};
pub use validator::Validator;
