//! Filter to require a minimum volume of ratings.
//!
//! An average over a handful of ratings says little, so only movies
//! rated more often than the threshold are ranked.

use crate::expand::GenreRow;
use crate::traits::Filter;
use anyhow::Result;

/// Keeps rows whose rating count is strictly greater than `min_ratings`.
pub struct MinimumCountFilter {
    min_ratings: u32,
}

impl MinimumCountFilter {
    /// Create a new MinimumCountFilter.
    ///
    /// # Arguments
    /// * `min_ratings` - Exclusive lower bound on rating count (typically 500)
    pub fn new(min_ratings: u32) -> Self {
        Self { min_ratings }
    }
}

impl Filter for MinimumCountFilter {
    fn name(&self) -> &str {
        "MinimumCountFilter"
    }

    fn apply(&self, rows: Vec<GenreRow>) -> Result<Vec<GenreRow>> {
        let filtered: Vec<GenreRow> = rows
            .into_iter()
            .filter(|row| row.rating_count > self.min_ratings)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(movie_id: u32, rating_count: u32) -> GenreRow {
        GenreRow {
            movie_id,
            title: format!("Movie {}", movie_id),
            genre: "Comedy".to_string(),
            rating_count,
            avg_rating: 4.0,
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let rows = vec![row(1, 499), row(2, 500), row(3, 501), row(4, 2000)];

        let filter = MinimumCountFilter::new(500);
        let filtered = filter.apply(rows).unwrap();

        let ids: Vec<u32> = filtered.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_zero_threshold_keeps_every_rated_movie() {
        let filter = MinimumCountFilter::new(0);
        let filtered = filter.apply(vec![row(1, 1), row(2, 0)]).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id, 1);
    }
}
