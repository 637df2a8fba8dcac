//! # Data Loader Crate
//!
//! Reads the two MovieLens-style input files of the top-of-genre report:
//! a ratings table and a movie-metadata table.
//!
//! ## Main Components
//!
//! - **types**: Record types (Rating, Movie) and id aliases
//! - **options**: Delimiter and header settings (LoadOptions)
//! - **header**: Header-row detection per file
//! - **parser**: Line splitter and delimited-table reader
//! - **dataset**: Loads both files in parallel
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Dataset, HeaderMode, LoadOptions};
//! use std::path::Path;
//!
//! let options = LoadOptions::new("::", HeaderMode::Auto)?;
//! let dataset = Dataset::load_from_files(
//!     Path::new("ml-1m/ratings.dat"),
//!     Path::new("ml-1m/movies.dat"),
//!     &options,
//! )?;
//!
//! let (ratings, movies) = dataset.counts();
//! println!("{} ratings for {} movies", ratings, movies);
//! ```

pub mod dataset;
pub mod error;
pub mod header;
pub mod options;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use dataset::Dataset;
pub use error::{DataLoadError, Result};
pub use header::{detect_header, HeaderFlags, HeaderMode};
pub use options::{LoadOptions, DEFAULT_DELIMITER};
pub use types::{split_genres, Movie, MovieId, Rating, RecordKind, UserId, GENRE_SEPARATOR};
