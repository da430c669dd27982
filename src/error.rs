//! Error types for resparse library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning a document into a resume record.
///
/// A field that cannot be found is never an error: extractors return `None`
/// for misses. Only malformed input and bad configuration end up here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension is not handled by any registered text extractor.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document is corrupt or its text could not be recovered.
    #[error("Text extraction error: {0}")]
    TextExtraction(String),

    /// A caller-supplied regular expression failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// The skills taxonomy could not be loaded.
    #[error("Skills taxonomy error: {0}")]
    Taxonomy(String),

    /// Batch input is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error aborts processing of a document before any field
    /// extractor runs.
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFormat(_) | Error::TextExtraction(_) | Error::Io(_)
        )
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::TextExtraction(err.to_string()),
        }
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtraction(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidPattern(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Taxonomy(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("xyz".to_string());
        assert_eq!(err.to_string(), "Unsupported document format: xyz");

        let err = Error::NotADirectory(PathBuf::from("resumes"));
        assert_eq!(err.to_string(), "Not a directory: resumes");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_fatal_input());
    }

    #[test]
    fn test_regex_error_conversion() {
        let err: Error = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, Error::InvalidPattern(_)));
        assert!(!err.is_fatal_input());
    }
}
