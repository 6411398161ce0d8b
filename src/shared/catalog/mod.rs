//! Catalog Module
//!
//! This module contains the data structures for the movie catalog:
//!
//! - `Movie` - A movie with its derived rating, genres and detail collections
//! - `Genre` / `MovieGenre` - Genres and the movie ↔ genre association
//! - `Rating` - A user's rating of a movie
//! - `Comment` - A user's comment on a movie
//! - `Favorite` - A user's favorite marker on a movie
//!
//! # Usage
//!
//! ```rust
//! use movie_catalog::shared::catalog::{Movie, Genre, Rating, Comment, Favorite};
//! ```

pub mod comment;
pub mod favorite;
pub mod genre;
pub mod movie;
pub mod rating;

// Re-export all types
pub use comment::Comment;
pub use favorite::Favorite;
pub use genre::{
    genre_map_from_arrays, genre_maps_by_movie, Genre, GenreMap, GenreRequest, MovieGenre,
};
pub use movie::{Movie, DEFAULT_RATING, PLACEHOLDER_IMAGE_URL, dedup_highest_rated};
pub use rating::{Rating, RatingRequest, MAX_RATING, MIN_RATING};
