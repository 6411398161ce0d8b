//! Movie Data Structure
//!
//! A movie as served by the catalog API. The average rating and the
//! favorite/comment counts are derived at read time; the detail collections
//! (`ratings`, `favorites`, `comments`) are only populated for the
//! single-movie fetch and are omitted from the JSON when empty.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::favorite::Favorite;
use super::genre::GenreMap;
use super::rating::Rating;

/// Rating reported for a movie nobody has rated yet
pub const DEFAULT_RATING: f64 = 1.0;

/// Image served when a movie has no stored image path
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://res.cloudinary.com/dvc85iwpj/image/upload/v1720247654/download_i0205y.png";

/// Represents a movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: NaiveDate,
    pub runtime: i32,
    /// Average of all ratings, one decimal place
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<Rating>,
    pub total_favorites: i64,
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub favorites: Vec<Favorite>,
    pub total_comments: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    pub genres: GenreMap,
    pub image: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Check whether the movie is tagged with the given genre
    pub fn has_genre(&self, genre_id: i32) -> bool {
        self.genres.contains_key(&genre_id)
    }
}

/// Collapse duplicate rows of the same movie, keeping the highest-rated one
///
/// Joins against the association table can yield one row per matching
/// genre. The surviving rows keep the order in which each movie first
/// appeared.
pub fn dedup_highest_rated(movies: Vec<Movie>) -> Vec<Movie> {
    let mut position: HashMap<i32, usize> = HashMap::new();
    let mut unique: Vec<Movie> = Vec::with_capacity(movies.len());

    for movie in movies {
        match position.get(&movie.id) {
            Some(&idx) => {
                if movie.rating > unique[idx].rating {
                    unique[idx] = movie;
                }
            }
            None => {
                position.insert(movie.id, unique.len());
                unique.push(movie);
            }
        }
    }

    unique
}
