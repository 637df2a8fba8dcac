//! Filter implementations for the genre-row pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod minimum_count;

// Re-export for convenience
pub use genre::GenreFilter;
pub use minimum_count::MinimumCountFilter;
