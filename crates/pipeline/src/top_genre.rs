//! End-to-end orchestration of the top-of-genre report.
//!
//! ## Stages
//! 1. Aggregate ratings into per-movie count and mean
//! 2. Inner-join the statistics with movie metadata
//! 3. Expand each movie into one row per genre
//! 4. Filter: rating count above the threshold, requested genre only
//! 5. Rank by average rating and project to (title, average, count)
//!
//! Every stage takes its input by value and returns a new collection.

use crate::aggregate::aggregate_ratings;
use crate::config::QueryConfig;
use crate::expand::expand_genres;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, MinimumCountFilter};
use crate::join::join_movies;
use crate::rank::{project, rank_by_rating, ResultRow};
use anyhow::{Context, Result};
use data_loader::{Dataset, LoadOptions};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Computes the best-rated movies of one genre.
#[derive(Debug, Clone)]
pub struct TopGenre {
    config: QueryConfig,
}

impl TopGenre {
    /// Create a runner for a validated query.
    pub fn new(config: QueryConfig) -> Result<Self> {
        config.validate().context("Invalid query configuration")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    fn filter_pipeline(&self) -> FilterPipeline {
        FilterPipeline::new()
            .add_filter(MinimumCountFilter::new(self.config.min_ratings))
            .add_filter(GenreFilter::new(self.config.genre.clone()))
    }

    /// Run every stage over an in-memory dataset.
    ///
    /// The ranking is returned in full; `QueryConfig::limit` is left to
    /// whoever displays it. An unknown genre or a threshold nothing passes
    /// gives an empty list.
    #[instrument(skip_all, fields(genre = %self.config.genre, min_ratings = self.config.min_ratings))]
    pub fn run(&self, dataset: Dataset) -> Result<Vec<ResultRow>> {
        let Dataset { ratings, movies } = dataset;

        let stats = aggregate_ratings(ratings);
        let joined = join_movies(stats, movies);
        let expanded = expand_genres(joined);
        let filtered = self.filter_pipeline().apply(expanded)?;
        let ranked = rank_by_rating(filtered);
        debug!(rows = ranked.len(), "Ranked rows");

        Ok(project(ranked))
    }

    /// Load both files and run the report.
    pub fn run_files(&self, ratings_path: &Path, movies_path: &Path, options: &LoadOptions) -> Result<Vec<ResultRow>> {
        let dataset = Dataset::load_from_files(ratings_path, movies_path, options)
            .context("Failed to load input files")?;
        let results = self.run(dataset)?;
        info!(genre = %self.config.genre, results = results.len(), "Report computed");
        Ok(results)
    }
}
