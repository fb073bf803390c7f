//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog file could not be read.
    #[display("I/O error")]
    Io,
    /// The catalog document is not valid JSON, or is missing required fields.
    #[display("invalid catalog data")]
    InvalidData,
    /// A publication date was neither an RFC 3339 timestamp nor a `YYYY-MM-DD` date.
    #[display("invalid publication date: {_0}")]
    InvalidDate(#[error(not(source))] String),
    /// Two records in the source list share an identifier.
    #[display("duplicate book id: {_0}")]
    DuplicateBook(#[error(not(source))] String),
    /// An identifier did not resolve to any record.
    #[display("book not found: {_0}")]
    BookNotFound(#[error(not(source))] String),
    /// Builtin catalog was not embedded under the requested name.
    #[display("asset not found: {_0}")]
    AssetNotFound(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Everything is local and loaded once, nothing here is transient.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exn::ResultExt;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::InvalidData.to_string(), "invalid catalog data");
        assert_eq!(ErrorKind::DuplicateBook("b1".to_string()).to_string(), "duplicate book id: b1");
        assert_eq!(ErrorKind::BookNotFound("b9".to_string()).to_string(), "book not found: b9");
    }

    #[test]
    fn error_kind_never_retryable() {
        assert!(!ErrorKind::Io.is_retryable());
        assert!(!ErrorKind::InvalidDate("yesterday".to_string()).is_retryable());
    }

    #[test]
    fn error_from_result() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));
        let err: Result<()> = result.or_raise(|| ErrorKind::Io);
        assert_eq!(*err.unwrap_err(), ErrorKind::Io);
    }
}
