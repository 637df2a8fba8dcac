//! Error types for the data-loader crate.
//!
//! Every variant carries enough context (file, line, field) for the
//! binary to print a message that points straight at the bad input.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while detecting headers, reading or parsing the
/// ratings and movie files.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// I/O error occurred while reading a file
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line in a data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A line has fewer fields than the record kind requires
    #[error("Expected at least {expected} fields but found {found} at line {line} in {file}")]
    FieldCountMismatch {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The delimited-table reader rejected the input
    #[error("Malformed delimited record in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Load options were missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DataLoadError {
    /// Map an `io::Error` raised while opening `path`, keeping "not found"
    /// distinct from other failures.
    pub fn open(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Map an `io::Error` raised while reading an already opened file.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
