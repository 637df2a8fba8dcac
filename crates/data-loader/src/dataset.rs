//! Loading both input files into memory.

use crate::error::Result;
use crate::options::LoadOptions;
use crate::parser;
use crate::types::{Movie, Rating};
use std::path::Path;
use tracing::{info, instrument};

/// The parsed contents of a ratings file and a movie file.
///
/// `Dataset` owns both record collections; the pipeline consumes it by
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub ratings: Vec<Rating>,
    pub movies: Vec<Movie>,
}

impl Dataset {
    pub fn new(ratings: Vec<Rating>, movies: Vec<Movie>) -> Self {
        Self { ratings, movies }
    }

    /// Load the ratings and movie files.
    ///
    /// Steps:
    /// 1. Resolve header presence for each file (reads first lines only,
    ///    so a missing file fails here before any parsing starts)
    /// 2. Parse both files in parallel
    ///
    /// Any I/O or parse failure aborts the whole load.
    #[instrument(skip(options), fields(delimiter = options.delimiter()))]
    pub fn load_from_files(ratings_path: &Path, movies_path: &Path, options: &LoadOptions) -> Result<Self> {
        let headers = options
            .header()
            .resolve(ratings_path, movies_path, options.delimiter())?;

        // Rayon's `join` runs both parses in parallel
        let (ratings, movies) = rayon::join(
            || parser::parse_ratings(ratings_path, options, headers.ratings),
            || parser::parse_movies(movies_path, options, headers.movies),
        );
        let ratings = ratings?;
        let movies = movies?;

        info!(
            ratings = ratings.len(),
            movies = movies.len(),
            "Loaded dataset"
        );
        Ok(Self { ratings, movies })
    }

    /// (ratings, movies) counts
    pub fn counts(&self) -> (usize, usize) {
        (self.ratings.len(), self.movies.len())
    }
}
