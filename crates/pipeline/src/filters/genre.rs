//! Filter to keep only rows of the requested genre.

use crate::expand::GenreRow;
use crate::traits::Filter;
use anyhow::Result;

/// Keeps rows whose genre equals the requested one.
///
/// The match is exact and case-sensitive: `comedy` does not match `Comedy`.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, rows: Vec<GenreRow>) -> Result<Vec<GenreRow>> {
        let filtered: Vec<GenreRow> = rows
            .into_iter()
            .filter(|row| row.genre == self.genre)
            .collect();
        Ok(filtered)
    }
}
