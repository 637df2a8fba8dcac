//! Genre expansion: one row per (movie, genre) pair.

use crate::join::JoinedRow;
use data_loader::{split_genres, MovieId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A joined row narrowed to a single genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRow {
    pub movie_id: MovieId,
    pub title: String,
    pub genre: String,
    pub rating_count: u32,
    pub avg_rating: f64,
}

/// Split every row's genre field on `|` and emit one row per non-empty
/// genre, in the order the genres are listed. A row with an empty genre
/// field emits nothing.
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn expand_genres(rows: Vec<JoinedRow>) -> Vec<GenreRow> {
    let expanded: Vec<GenreRow> = rows
        .into_par_iter()
        .flat_map_iter(|row| {
            let genres: Vec<String> = split_genres(&row.genres).map(str::to_string).collect();
            genres.into_iter().map(move |genre| GenreRow {
                movie_id: row.movie_id,
                title: row.title.clone(),
                genre,
                rating_count: row.rating_count,
                avg_rating: row.avg_rating,
            })
        })
        .collect();

    debug!(rows = expanded.len(), "Expanded genres");
    expanded
}
