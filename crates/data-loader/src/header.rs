//! Header detection.
//!
//! MovieLens exports differ: the `.dat` files of ml-1m/ml-10m have no
//! header row, the `.csv` files of ml-20m do. A file is taken to have a
//! header unless the first field of its first line is a plain number.

use crate::error::{DataLoadError, Result};
use crate::parser::strip_non_ascii;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// How header presence is decided for the two input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Inspect each file's first line independently
    #[default]
    Auto,
    /// Both files start with a header row
    Present,
    /// Neither file has a header row
    Absent,
    /// Inspect the movie file only and apply its answer to both files
    FromMovies,
}

/// Header presence resolved for each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub ratings: bool,
    pub movies: bool,
}

impl HeaderMode {
    /// Resolve this mode into per-file flags, reading first lines as needed.
    pub fn resolve(self, ratings_path: &Path, movies_path: &Path, delimiter: &str) -> Result<HeaderFlags> {
        let flags = match self {
            HeaderMode::Auto => HeaderFlags {
                ratings: detect_header(ratings_path, delimiter)?,
                movies: detect_header(movies_path, delimiter)?,
            },
            HeaderMode::Present => HeaderFlags { ratings: true, movies: true },
            HeaderMode::Absent => HeaderFlags { ratings: false, movies: false },
            HeaderMode::FromMovies => {
                let movies = detect_header(movies_path, delimiter)?;
                HeaderFlags { ratings: movies, movies }
            }
        };
        debug!(mode = ?self, ratings = flags.ratings, movies = flags.movies, "Resolved header flags");
        Ok(flags)
    }
}

/// Decide whether `path` starts with a header row.
///
/// Reads only the first line. Returns `false` when its first field is a
/// non-empty run of ASCII digits, `true` otherwise (including for an
/// empty file).
pub fn detect_header(path: &Path, delimiter: &str) -> Result<bool> {
    let file = File::open(path).map_err(|e| DataLoadError::open(path, e))?;
    let mut reader = BufReader::new(file);

    let mut first_line = Vec::new();
    reader
        .read_until(b'\n', &mut first_line)
        .map_err(|e| DataLoadError::read(path, e))?;

    let line = strip_non_ascii(&String::from_utf8_lossy(&first_line));
    Ok(!starts_with_numeric_field(&line, delimiter))
}

fn starts_with_numeric_field(line: &str, delimiter: &str) -> bool {
    let line = line.trim_end_matches(['\r', '\n']);
    let first = line.split(delimiter).next().unwrap_or("");
    !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit())
}
