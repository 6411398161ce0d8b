//! Favorite Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marks a movie as one of a user's favorites
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "fav_at")]
    pub updated_at: DateTime<Utc>,
}
