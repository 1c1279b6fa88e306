//! Error types for the Xiphos library.
//!
//! All fallible operations return [`XiphosError`] through the [`Result`]
//! alias. Absence is never an error: looking up an unseen term or document
//! yields an empty result, because boolean query composition relies on that.
//!
//! # Examples
//!
//! ```
//! use xiphos::error::{Result, XiphosError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(XiphosError::empty_document_id())
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Xiphos operations.
///
/// This enum represents all possible errors that can occur in the Xiphos
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for the
/// domain-specific variants.
#[derive(Error, Debug)]
pub enum XiphosError {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A position list handed to the index is not strictly increasing.
    #[error("Invalid positions: {0}")]
    InvalidPositions(String),

    /// A document was added with an empty or blank identifier.
    #[error("Document id must not be empty or blank")]
    EmptyDocumentId,

    /// A persisted index file is missing, unparseable, or violates
    /// index invariants.
    #[error("Corrupt index file: {0}")]
    CorruptIndex(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with XiphosError.
pub type Result<T> = std::result::Result<T, XiphosError>;

impl XiphosError {
    /// Create a new invalid-positions error.
    pub fn invalid_positions<S: Into<String>>(msg: S) -> Self {
        XiphosError::InvalidPositions(msg.into())
    }

    /// Create a new empty-document-id error.
    pub fn empty_document_id() -> Self {
        XiphosError::EmptyDocumentId
    }

    /// Create a new corrupt-index error.
    pub fn corrupt_index<S: Into<String>>(msg: S) -> Self {
        XiphosError::CorruptIndex(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        XiphosError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = XiphosError::invalid_positions("positions must increase");
        assert_eq!(
            error.to_string(),
            "Invalid positions: positions must increase"
        );

        let error = XiphosError::corrupt_index("bad format marker");
        assert_eq!(error.to_string(), "Corrupt index file: bad format marker");

        let error = XiphosError::empty_document_id();
        assert_eq!(error.to_string(), "Document id must not be empty or blank");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let xiphos_error = XiphosError::from(io_error);

        match xiphos_error {
            XiphosError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
