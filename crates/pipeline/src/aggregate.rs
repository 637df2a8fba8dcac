//! Grouped reduction of ratings into per-movie statistics.
//!
//! ## Algorithm
//! 1. Cut the ratings into fixed-size chunks
//! 2. Reduce every chunk in parallel into a `HashMap<MovieId, PartialAggregate>`
//! 3. Merge the partials in chunk order
//! 4. Turn each merged partial into `MovieStats`, sorted by movie id
//!
//! Chunk boundaries do not depend on the thread pool and the merge is
//! sequential, so every run adds the same floats in the same order.

use data_loader::{MovieId, Rating};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Ratings reduced per task
const CHUNK_SIZE: usize = 64 * 1024;

/// Count/sum pair for one movie over one partition of the ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialAggregate {
    pub count: u32,
    pub sum: f64,
}

impl PartialAggregate {
    pub fn add(&mut self, rating: f64) {
        self.count += 1;
        self.sum += rating;
    }

    pub fn merge(&mut self, other: PartialAggregate) {
        self.count += other.count;
        self.sum += other.sum;
    }

    /// Arithmetic mean; 0.0 for an empty aggregate
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Rating count and mean rating of one movie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovieStats {
    pub movie_id: MovieId,
    pub rating_count: u32,
    pub avg_rating: f64,
}

/// Reduce one partition of ratings.
pub fn partial_aggregate(ratings: &[Rating]) -> HashMap<MovieId, PartialAggregate> {
    let mut partial: HashMap<MovieId, PartialAggregate> = HashMap::new();
    for rating in ratings {
        partial.entry(rating.movie_id).or_default().add(rating.rating);
    }
    partial
}

/// Merge partial aggregates, combining entries with the same movie id.
pub fn merge_partials<I>(partials: I) -> HashMap<MovieId, PartialAggregate>
where
    I: IntoIterator<Item = HashMap<MovieId, PartialAggregate>>,
{
    let mut merged: HashMap<MovieId, PartialAggregate> = HashMap::new();
    for partial in partials {
        for (movie_id, aggregate) in partial {
            merged.entry(movie_id).or_default().merge(aggregate);
        }
    }
    merged
}

/// Group ratings by movie and compute count and mean per movie.
///
/// Returns one `MovieStats` per distinct movie id, ordered by movie id.
/// Empty input gives an empty result.
#[instrument(skip_all, fields(ratings = ratings.len()))]
pub fn aggregate_ratings(ratings: Vec<Rating>) -> Vec<MovieStats> {
    let partials: Vec<HashMap<MovieId, PartialAggregate>> =
        ratings.par_chunks(CHUNK_SIZE).map(partial_aggregate).collect();
    debug!(partitions = partials.len(), "Reduced partitions");

    let mut stats: Vec<MovieStats> = merge_partials(partials)
        .into_iter()
        .map(|(movie_id, aggregate)| MovieStats {
            movie_id,
            rating_count: aggregate.count,
            avg_rating: aggregate.mean(),
        })
        .collect();
    stats.sort_unstable_by_key(|s| s.movie_id);

    debug!(movies = stats.len(), "Aggregated ratings");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user_id: u32, movie_id: u32, value: f64) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating: value,
            timestamp: None,
        }
    }

    #[test]
    fn test_count_and_mean() {
        let ratings = vec![
            rating(1, 10, 5.0),
            rating(2, 10, 4.0),
            rating(3, 10, 3.0),
            rating(1, 20, 2.0),
        ];

        let stats = aggregate_ratings(ratings);
        assert_eq!(
            stats,
            vec![
                MovieStats { movie_id: 10, rating_count: 3, avg_rating: 4.0 },
                MovieStats { movie_id: 20, rating_count: 1, avg_rating: 2.0 },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_ratings(Vec::new()).is_empty());
    }

    #[test]
    fn test_merging_partials_matches_single_pass() {
        let ratings: Vec<Rating> = (0..1000)
            .map(|i| rating(i, i % 7, (i % 5) as f64 + 0.5))
            .collect();

        let whole = partial_aggregate(&ratings);
        let merged = merge_partials(ratings.chunks(33).map(partial_aggregate));

        assert_eq!(whole.len(), merged.len());
        for (movie_id, aggregate) in &whole {
            let other = merged[movie_id];
            assert_eq!(aggregate.count, other.count);
            assert!((aggregate.sum - other.sum).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spans_many_partitions() {
        let total = CHUNK_SIZE * 3 + 17;
        let ratings: Vec<Rating> = (0..total).map(|i| rating(i as u32, 1, 4.0)).collect();

        let stats = aggregate_ratings(ratings);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].rating_count as usize, total);
        assert_eq!(stats[0].avg_rating, 4.0);
    }

    #[test]
    fn test_empty_partial_mean() {
        assert_eq!(PartialAggregate::default().mean(), 0.0);
    }
}
