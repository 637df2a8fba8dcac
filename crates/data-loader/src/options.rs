//! Options that control how the ratings and movie files are read.

use crate::error::{DataLoadError, Result};
use crate::header::HeaderMode;

/// Field delimiter used by the MovieLens 1M and 10M exports
pub const DEFAULT_DELIMITER: &str = "::";

/// How both input files are split into fields.
///
/// Built through [`LoadOptions::new`], which rejects delimiters the
/// parser cannot work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    delimiter: String,
    header: HeaderMode,
}

impl LoadOptions {
    /// Create validated load options.
    ///
    /// The delimiter must be non-empty, ASCII (lines are normalized to
    /// ASCII before splitting) and free of line breaks.
    pub fn new(delimiter: impl Into<String>, header: HeaderMode) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(DataLoadError::Config("delimiter must not be empty".to_string()));
        }
        if !delimiter.is_ascii() {
            return Err(DataLoadError::Config(format!(
                "delimiter `{}` must be ASCII",
                delimiter
            )));
        }
        if delimiter.contains(['\n', '\r']) {
            return Err(DataLoadError::Config(
                "delimiter must not contain a line break".to_string(),
            ));
        }
        Ok(Self { delimiter, header })
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn header(&self) -> HeaderMode {
        self.header
    }

    /// The delimiter as a single byte, when it is exactly one character.
    ///
    /// Single-byte delimiters are read with the delimited-table reader;
    /// anything longer goes through the line splitter.
    pub fn single_byte_delimiter(&self) -> Option<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Some(*byte),
            _ => None,
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            header: HeaderMode::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LoadOptions::default();
        assert_eq!(options.delimiter(), "::");
        assert_eq!(options.header(), HeaderMode::Auto);
        assert_eq!(options.single_byte_delimiter(), None);
    }

    #[test]
    fn test_single_byte_delimiter() {
        let options = LoadOptions::new(",", HeaderMode::Auto).unwrap();
        assert_eq!(options.single_byte_delimiter(), Some(b','));

        let options = LoadOptions::new("\t", HeaderMode::Absent).unwrap();
        assert_eq!(options.single_byte_delimiter(), Some(b'\t'));
    }

    #[test]
    fn test_invalid_delimiters_are_config_errors() {
        for bad in ["", "\n", ",\r", "§"] {
            let err = LoadOptions::new(bad, HeaderMode::Auto).unwrap_err();
            assert!(matches!(err, DataLoadError::Config(_)), "{:?} accepted", bad);
        }
    }
}
