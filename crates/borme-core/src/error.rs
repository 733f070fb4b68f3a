//! Error types for the borme-core library.

use thiserror::Error;

/// Main error type for the borme library.
#[derive(Error, Debug)]
pub enum BormeError {
    /// Document-level error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to obtaining or identifying a document.
///
/// A document failure never propagates past that document: batch callers
/// convert it into zero records plus an error marker and continue.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document text could not be obtained.
    #[error("unreadable document {path}: {reason}")]
    Unreadable { path: String, reason: String },

    /// The filename does not match the `BORME-<letter>-<year>-<issue>-<code>` grammar.
    #[error("filename does not match bulletin grammar: {0}")]
    BadFilename(String),
}

/// Errors related to field extraction.
///
/// Optional-field misses are not errors (the field stays unset); these cover
/// the few places where a value is present but cannot be represented.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Failed to parse a captured value.
    #[error("failed to parse {field}: {value}")]
    Parse { field: String, value: String },
}

/// Result type for the borme library.
pub type Result<T> = std::result::Result<T, BormeError>;
