//! Inner equi-join of movie statistics with movie metadata.

use crate::aggregate::MovieStats;
use data_loader::{Movie, MovieId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A movie's statistics next to its title and raw genre field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRow {
    pub movie_id: MovieId,
    pub title: String,
    /// Raw `|`-separated genre list
    pub genres: String,
    pub rating_count: u32,
    pub avg_rating: f64,
}

/// Join statistics with movies on movie id.
///
/// Only ids present on both sides produce a row: movies nobody rated and
/// ratings for unknown movies are dropped. If the movie list repeats an
/// id, its first occurrence is used, so each id appears at most once.
/// Rows come out in the order of `stats`.
#[instrument(skip_all, fields(stats = stats.len(), movies = movies.len()))]
pub fn join_movies(stats: Vec<MovieStats>, movies: Vec<Movie>) -> Vec<JoinedRow> {
    let mut by_id: HashMap<MovieId, Movie> = HashMap::with_capacity(movies.len());
    for movie in movies {
        by_id.entry(movie.id).or_insert(movie);
    }

    let rows: Vec<JoinedRow> = stats
        .into_par_iter()
        .filter_map(|stats| {
            by_id.get(&stats.movie_id).map(|movie| JoinedRow {
                movie_id: stats.movie_id,
                title: movie.title.clone(),
                genres: movie.genres.clone(),
                rating_count: stats.rating_count,
                avg_rating: stats.avg_rating,
            })
        })
        .collect();

    debug!(rows = rows.len(), "Joined stats with movies");
    rows
}
