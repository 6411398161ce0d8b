//! Comment Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's comment on a movie
///
/// `user_name` is denormalized from the users table at read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub movie_id: i32,
    pub comment: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "commented_at")]
    pub updated_at: DateTime<Utc>,
}

fn is_unset(id: &i32) -> bool {
    *id == 0
}
