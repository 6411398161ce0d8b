//! Genre Data Structures
//!
//! Genres are referenced by movies through the `movies_genres` association
//! table. On the wire a movie carries its genres as a `{ id: name }` object.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Genre id → genre name mapping carried by every movie
///
/// Keys are unique by construction, so a movie can never list the same
/// genre twice.
pub type GenreMap = BTreeMap<i32, String>;

/// A genre row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    /// Genre id
    pub id: i32,
    /// Display name of the genre
    pub genre_name: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}

/// Association row linking a movie to a genre
///
/// Carries the genre itself so callers can read the name without a second
/// lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieGenre {
    #[serde(skip)]
    pub id: i32,
    #[serde(skip)]
    pub movie_id: i32,
    #[serde(skip)]
    pub genre_id: i32,
    pub genre: Genre,
}

/// Request body for creating or renaming a genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreRequest {
    pub genre_name: String,
}

/// Collapse parallel id/name arrays (as produced by `array_agg`) into a
/// genre map
///
/// Pairs are zipped positionally; surplus entries on either side are
/// ignored and a repeated id keeps its last name.
pub fn genre_map_from_arrays(ids: Vec<i32>, names: Vec<String>) -> GenreMap {
    ids.into_iter().zip(names).collect()
}

/// Group association rows into one genre map per movie
pub fn genre_maps_by_movie(links: impl IntoIterator<Item = MovieGenre>) -> HashMap<i32, GenreMap> {
    let mut maps: HashMap<i32, GenreMap> = HashMap::new();
    for link in links {
        maps.entry(link.movie_id)
            .or_default()
            .insert(link.genre.id, link.genre.genre_name);
    }
    maps
}
