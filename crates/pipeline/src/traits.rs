//! The row filter seam of the report.

use crate::expand::GenreRow;
use anyhow::Result;

/// A predicate over genre rows, applied as one step of a [`FilterPipeline`].
///
/// Filters are independent of each other, so a chain gives the same rows
/// in any order. Retained rows keep their relative order; ranking relies
/// on it to break ties.
///
/// [`FilterPipeline`]: crate::FilterPipeline
pub trait Filter: Send + Sync {
    /// Short name used in debug logs
    fn name(&self) -> &str;

    fn apply(&self, rows: Vec<GenreRow>) -> Result<Vec<GenreRow>>;
}
