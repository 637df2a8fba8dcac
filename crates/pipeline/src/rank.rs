//! Ranking and final projection.

use crate::expand::GenreRow;
use serde::{Deserialize, Serialize};

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub title: String,
    pub avg_rating: f64,
    pub rating_count: u32,
}

impl From<GenreRow> for ResultRow {
    fn from(row: GenreRow) -> Self {
        Self {
            title: row.title,
            avg_rating: row.avg_rating,
            rating_count: row.rating_count,
        }
    }
}

/// Sort by average rating, highest first.
///
/// The sort is stable: rows with equal averages keep their input order.
pub fn rank_by_rating(mut rows: Vec<GenreRow>) -> Vec<GenreRow> {
    rows.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
    rows
}

/// Keep only title, average and count.
pub fn project(rows: Vec<GenreRow>) -> Vec<ResultRow> {
    rows.into_iter().map(ResultRow::from).collect()
}
