//! Error types for the catalog crate.
//!
//! Every failure that can happen while loading a catalog or library
//! snapshot, or while mutating a reader's library, is a variant here.
//! The discovery and recommendation crates never produce errors; only
//! the edges that touch files or enforce library invariants do.

use thiserror::Error;

/// Errors that can occur while loading snapshots or editing a library
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Snapshot file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a snapshot
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Snapshot was not valid JSON for the expected shape
    ///
    /// Carries the file (or `<memory>`) so the caller can point at it
    #[error("Malformed JSON in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field had a value outside its domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The same book id appeared twice in one catalog snapshot
    #[error("Duplicate book id: {0}")]
    DuplicateBook(String),

    /// The reader already has this book on some shelf
    #[error("Book {book_id} is already in the library")]
    AlreadyInLibrary { book_id: String },

    /// The reader does not have this book on any shelf
    #[error("Book {book_id} is not in the library")]
    NotInLibrary { book_id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
