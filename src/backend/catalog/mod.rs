//! Movie Catalog Module
//!
//! # Module Structure
//!
//! ```text
//! catalog/
//! ├── mod.rs      - Module exports
//! ├── images.rs   - Image CDN URLs
//! ├── movies.rs   - Movie queries
//! ├── genres.rs   - Genre queries
//! ├── ratings.rs  - Rating queries
//! └── handlers/   - HTTP handlers
//! ```

pub mod genres;
pub mod handlers;
pub mod images;
pub mod movies;
pub mod ratings;

pub use images::ImageResolver;
