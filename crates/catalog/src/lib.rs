//! # Catalog Crate
//!
//! This crate owns the data every other crate works on: the book catalog
//! snapshot and a reader's library.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Book, LibraryItem, ShelfType)
//! - **parser**: Parse catalog/library JSON snapshots into Rust structs
//! - **index**: CatalogIndex with id and genre lookups, snapshot loading
//! - **library**: The reader's library and its add/move/remove lifecycle
//! - **error**: Error types for loading and library edits
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_snapshot, ShelfType};
//! use std::path::Path;
//!
//! let mut snapshot = load_snapshot(Path::new("data/sample"))?;
//! snapshot.library.move_to_shelf("65a1", ShelfType::Read)?;
//!
//! for book in snapshot.catalog.books() {
//!     println!("{} by {} ({:.1})", book.title, book.author, book.rating());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod library;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::{load_snapshot, CatalogIndex, Snapshot};
pub use library::Library;
pub use types::{
    // Type aliases
    BookId,
    // Core types
    Book,
    LibraryItem,
    // Enums
    ShelfType,
    // Helpers
    parse_date,
    MAX_RATING,
};
