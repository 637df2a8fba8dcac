//! Parser for the ratings and movie files.
//!
//! Formats (one record per line, fields split by the configured delimiter):
//! - ratings: userId, movieId, rating[, timestamp]
//! - movies:  movieId, title, genres
//!
//! Lines are normalized to 7-bit ASCII before they are split: bytes that
//! are not valid UTF-8 and characters outside ASCII are dropped, so the
//! Latin-1 and UTF-8 exports of the catalog parse the same way.
//!
//! Files are read one of two ways. A multi-character delimiter such as
//! `::` goes through a plain line splitter. A single-byte delimiter goes
//! through `csv::Reader`, which also understands quoted fields like
//! `"American President, The (1995)"`. Both feed every line through the
//! same [`FromFields`] conversion.

use crate::error::{DataLoadError, Result};
use crate::options::LoadOptions;
use crate::types::{Movie, Rating, RecordKind};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};

/// A record that can be built from the positional fields of one line.
pub trait FromFields: Sized {
    const KIND: RecordKind;

    /// Fields a line must have before conversion is attempted
    const MIN_FIELDS: usize;

    /// Build the record. `fields` holds at least `MIN_FIELDS` entries.
    /// The error is a human-readable reason naming the bad field.
    fn from_fields(fields: &[&str]) -> std::result::Result<Self, String>;
}

impl FromFields for Rating {
    const KIND: RecordKind = RecordKind::Rating;
    const MIN_FIELDS: usize = 3;

    fn from_fields(fields: &[&str]) -> std::result::Result<Self, String> {
        let timestamp = match fields.get(3).map(|s| s.trim()) {
            Some(ts) if !ts.is_empty() => Some(parse_number(ts, "timestamp")?),
            _ => None,
        };

        let rating: f64 = parse_number(fields[2], "rating")?;
        if !rating.is_finite() {
            return Err(format!("Invalid rating: `{}` (not a finite number)", fields[2].trim()));
        }

        Ok(Rating {
            user_id: parse_number(fields[0], "userId")?,
            movie_id: parse_number(fields[1], "movieId")?,
            rating,
            timestamp,
        })
    }
}

impl FromFields for Movie {
    const KIND: RecordKind = RecordKind::Movie;
    const MIN_FIELDS: usize = 3;

    fn from_fields(fields: &[&str]) -> std::result::Result<Self, String> {
        Ok(Movie {
            id: parse_number(fields[0], "movieId")?,
            title: fields[1].to_string(),
            genres: fields[2].to_string(),
        })
    }
}

fn parse_number<T>(value: &str, field: &str) -> std::result::Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = value.trim();
    trimmed
        .parse()
        .map_err(|e| format!("Invalid {}: `{}` ({})", field, trimmed, e))
}

/// Drop every character outside 7-bit ASCII.
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Convert already split fields into a record, attaching file and line to
/// any failure.
pub fn parse_fields<T: FromFields>(fields: &[&str], file: &str, line: usize) -> Result<T> {
    if fields.len() < T::MIN_FIELDS {
        return Err(DataLoadError::FieldCountMismatch {
            file: file.to_string(),
            line,
            expected: T::MIN_FIELDS,
            found: fields.len(),
        });
    }
    T::from_fields(fields).map_err(|reason| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason,
    })
}

/// Parse one ASCII line split by `delimiter`.
///
/// # Example
/// ```
/// use data_loader::{parser::parse_line, Rating};
///
/// let rating: Rating = parse_line("1::1193::5::978300760", "::", "ratings.dat", 1).unwrap();
/// assert_eq!(rating.movie_id, 1193);
/// assert_eq!(rating.timestamp, Some(978300760));
/// ```
pub fn parse_line<T: FromFields>(line: &str, delimiter: &str, file: &str, line_no: usize) -> Result<T> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    parse_fields(&fields, file, line_no)
}

/// Parse the ratings file
#[instrument(skip_all, fields(path = %path.display(), has_header = has_header))]
pub fn parse_ratings(path: &Path, options: &LoadOptions, has_header: bool) -> Result<Vec<Rating>> {
    read_records(path, options, has_header)
}

/// Parse the movies file
#[instrument(skip_all, fields(path = %path.display(), has_header = has_header))]
pub fn parse_movies(path: &Path, options: &LoadOptions, has_header: bool) -> Result<Vec<Movie>> {
    read_records(path, options, has_header)
}

/// Read every record of kind `T` from `path`, choosing the reader by
/// delimiter width.
pub fn read_records<T: FromFields>(path: &Path, options: &LoadOptions, has_header: bool) -> Result<Vec<T>> {
    let records = match options.single_byte_delimiter() {
        Some(delimiter) => read_table(path, delimiter, has_header)?,
        None => read_lines(path, options.delimiter(), has_header)?,
    };
    debug!(kind = %T::KIND, count = records.len(), "Parsed records");
    Ok(records)
}

/// Line splitter for multi-character delimiters.
fn read_lines<T: FromFields>(path: &Path, delimiter: &str, has_header: bool) -> Result<Vec<T>> {
    let file_label = path.display().to_string();
    let file = File::open(path).map_err(|e| DataLoadError::open(path, e))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|e| DataLoadError::read(path, e))?;
        if idx == 0 && has_header {
            continue;
        }

        let line = strip_non_ascii(&String::from_utf8_lossy(&raw));
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }

        records.push(parse_line(line, delimiter, &file_label, idx + 1)?);
    }

    Ok(records)
}

/// Delimited-table reader for single-byte delimiters.
fn read_table<T: FromFields>(path: &Path, delimiter: u8, has_header: bool) -> Result<Vec<T>> {
    let file_label = path.display().to_string();
    let file = File::open(path).map_err(|e| DataLoadError::open(path, e))?;
    // Headers are skipped by physical line, as in the line splitter; the csv
    // reader's own header handling would take the first non-blank record.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    let mut record = csv::ByteRecord::new();
    loop {
        let more = reader
            .read_byte_record(&mut record)
            .map_err(|source| DataLoadError::Csv {
                file: file_label.clone(),
                source,
            })?;
        if !more {
            break;
        }

        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        if line == 1 && has_header {
            continue;
        }

        let fields: Vec<String> = record
            .iter()
            .map(|field| strip_non_ascii(&String::from_utf8_lossy(field)))
            .collect();
        if is_blank(&fields) {
            continue;
        }
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();

        records.push(parse_fields(&fields, &file_label, line)?);
    }

    Ok(records)
}

fn is_blank(fields: &[String]) -> bool {
    match fields {
        [] => true,
        [only] => only.trim().is_empty(),
        _ => false,
    }
}
