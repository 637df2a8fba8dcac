//! Ordered chain of row filters.

use crate::expand::GenreRow;
use crate::traits::Filter;
use anyhow::Result;
use tracing;

/// Filters applied one after another to the expanded genre rows.
///
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumCountFilter::new(500))
///     .add_filter(GenreFilter::new("Comedy"));
///
/// let comedies = pipeline.apply(rows)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run the rows through every filter in insertion order, logging how
    /// many rows each one keeps. Stops at the first failing filter.
    pub fn apply(&self, rows: Vec<GenreRow>) -> Result<Vec<GenreRow>> {
        let mut current = rows;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current)?;
            tracing::debug!(
                filter = filter.name(),
                before,
                after = current.len(),
                "Applied row filter"
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
