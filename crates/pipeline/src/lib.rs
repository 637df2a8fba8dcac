//! Pipeline computing the best-rated movies of a genre.
//!
//! This crate provides:
//! - Aggregator: ratings grouped into per-movie count and mean
//! - Joiner: statistics joined with movie metadata
//! - Genre expander: one row per (movie, genre)
//! - Filter trait, filters and FilterPipeline for composing them
//! - Ranking and projection of the final report
//! - TopGenre, which runs all of the above
//!
//! ## Architecture
//! Data flows strictly left to right:
//! ratings → MovieStats → JoinedRow → GenreRow → filtered GenreRow → ResultRow
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{QueryConfig, TopGenre};
//! use data_loader::LoadOptions;
//!
//! let runner = TopGenre::new(QueryConfig::new("Drama").with_min_ratings(500))?;
//! let results = runner.run_files(ratings_path, movies_path, &LoadOptions::default())?;
//!
//! for row in results.iter().take(runner.config().limit) {
//!     println!("{} {:.3} ({})", row.title, row.avg_rating, row.rating_count);
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod expand;
pub mod filter_pipeline;
pub mod filters;
pub mod join;
pub mod rank;
pub mod top_genre;
pub mod traits;

// Re-export main types
pub use aggregate::{aggregate_ratings, MovieStats, PartialAggregate};
pub use config::{ConfigError, QueryConfig, DEFAULT_GENRE, DEFAULT_LIMIT, DEFAULT_MIN_RATINGS};
pub use expand::{expand_genres, GenreRow};
pub use filter_pipeline::FilterPipeline;
pub use join::{join_movies, JoinedRow};
pub use rank::{project, rank_by_rating, ResultRow};
pub use top_genre::TopGenre;
pub use traits::Filter;
