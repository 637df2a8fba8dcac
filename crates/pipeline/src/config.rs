//! Query settings for the top-of-genre report.

use thiserror::Error;

/// Genre reported when none is requested
pub const DEFAULT_GENRE: &str = "Comedy";

/// A movie needs strictly more ratings than this to be ranked
pub const DEFAULT_MIN_RATINGS: u32 = 500;

/// Rows shown by default
pub const DEFAULT_LIMIT: usize = 10;

/// Invalid query settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("genre must not be empty")]
    EmptyGenre,

    #[error("result limit must be at least 1")]
    ZeroLimit,
}

/// What to rank and how much of it to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Exact, case-sensitive genre name
    pub genre: String,
    /// Minimum rating count (exclusive)
    pub min_ratings: u32,
    /// Number of rows to display. Does not cap the computed ranking.
    pub limit: usize,
}

impl QueryConfig {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            ..Self::default()
        }
    }

    pub fn with_min_ratings(mut self, min_ratings: u32) -> Self {
        self.min_ratings = min_ratings;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.genre.is_empty() {
            return Err(ConfigError::EmptyGenre);
        }
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            genre: DEFAULT_GENRE.to_string(),
            min_ratings: DEFAULT_MIN_RATINGS,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QueryConfig::default();
        assert_eq!(config.genre, "Comedy");
        assert_eq!(config.min_ratings, 500);
        assert_eq!(config.limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = QueryConfig::new("Drama").with_min_ratings(2).with_limit(3);
        assert_eq!(config.genre, "Drama");
        assert_eq!(config.min_ratings, 2);
        assert_eq!(config.limit, 3);
    }

    #[test]
    fn test_invalid_settings() {
        assert_eq!(QueryConfig::new("").validate(), Err(ConfigError::EmptyGenre));
        assert_eq!(
            QueryConfig::default().with_limit(0).validate(),
            Err(ConfigError::ZeroLimit)
        );
    }
}
