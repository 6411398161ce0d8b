//! Rating Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest rating a user may submit
pub const MIN_RATING: f32 = 1.0;

/// Highest rating a user may submit
pub const MAX_RATING: f32 = 5.0;

/// A user's rating of a movie
///
/// At most one rating exists per (movie, user) pair; resubmitting updates
/// the existing row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub movie_id: i32,
    pub user_id: i32,
    pub rating: f32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    /// Build a not-yet-persisted rating stamped with the current time
    pub fn new(movie_id: i32, user_id: i32, rating: f32) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            movie_id,
            user_id,
            rating,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request body for rating a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: f32,
}
