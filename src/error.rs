//! Unified error types for rowpack.
//!
//! This module provides a single [`RowpackError`] enum that covers all error
//! cases in the library. Every I/O failure, whether it comes from creating the
//! output file, writing a row or flushing the buffer, ends up in
//! [`RowpackError::Io`].

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for rowpack operations.
///
/// # Example
///
/// ```rust
/// use rowpack::error::Result;
/// use rowpack::Document;
///
/// fn load() -> Result<Document> {
///     Ok(Document::sample())
/// }
/// ```
pub type Result<T> = std::result::Result<T, RowpackError>;

/// The error type for all rowpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RowpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The output file cannot be created (missing directory, permission denied)
    /// - The sink rejects a write (disk full, closed handle)
    /// - Flushing buffered rows fails
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV encoder failed for a reason other than I/O.
    ///
    /// Rows are written in flexible mode, so this is not expected in practice.
    #[error("CSV error: {0:?}")]
    Csv(csv::ErrorKind),

    /// JSON parsing error while loading a document.
    #[cfg(feature = "json-input")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was valid JSON but not an array of arrays of strings.
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// Description of what's wrong
        message: String,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when rendering a document to a `String` produced invalid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<csv::Error> for RowpackError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(source) => RowpackError::Io(source),
            kind => RowpackError::Csv(kind),
        }
    }
}

impl From<std::string::FromUtf8Error> for RowpackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        RowpackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl RowpackError {
    /// Creates an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        RowpackError::InvalidDocument {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, RowpackError::Io(_))
    }

    /// Returns `true` if the input document had the wrong shape.
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, RowpackError::InvalidDocument { .. })
    }
}
