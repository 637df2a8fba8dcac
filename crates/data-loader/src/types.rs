//! Core record types for the ratings and movie files.
//!
//! Both record types are plain owned values: they are created once per
//! input line, never mutated, and handed by value to the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of the user who submitted a rating
pub type UserId = u32;

/// Identifier shared by the ratings and movie files (the join key)
pub type MovieId = u32;

/// Separator between genre names inside a movie's genre field
pub const GENRE_SEPARATOR: char = '|';

// =============================================================================
// Records
// =============================================================================

/// A single rating from a user for a movie.
///
/// The rating scale is not enforced: any value that parses as a float is
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: f64,
    /// Unix timestamp; some exports omit the column
    pub timestamp: Option<i64>,
}

/// A movie from the metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    /// Title, ASCII-normalized
    pub title: String,
    /// Raw `|`-separated genre list, ASCII-normalized
    pub genres: String,
}

impl Movie {
    /// Genre names in source order, skipping empty tokens.
    ///
    /// `"Comedy|Drama"` yields `Comedy`, `Drama`; `""` yields nothing.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        split_genres(&self.genres)
    }
}

/// Split a raw genre field into its non-empty genre names.
pub fn split_genres(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(GENRE_SEPARATOR).filter(|genre| !genre.is_empty())
}

/// The two kinds of record a delimited line can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Rating,
    Movie,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Rating => write!(f, "rating"),
            RecordKind::Movie => write!(f, "movie"),
        }
    }
}
