//! Parser for catalog and library snapshot files.
//!
//! Both files are JSON arrays in the shapes the REST API returns:
//! - books.json: `[{ "_id", "title", "author", "genre", ... }]`
//! - library.json: `[{ "bookId", "shelfType", "addedDate", ... }]`
//!
//! Parsing is strict about shape (a wrong type is an error) and lenient
//! about optional fields (missing counts default to 0).

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a whole snapshot file into memory
fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_json<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|source| CatalogError::ParseError {
        file: file.to_string(),
        source,
    })
}

/// Parse a books.json file
pub fn parse_books(path: &Path) -> Result<Vec<Book>> {
    let content = read_file(path)?;
    parse_json(&content, &path.display().to_string())
}

/// Parse a books document that is already in memory
pub fn parse_books_str(content: &str) -> Result<Vec<Book>> {
    parse_json(content, "<memory>")
}

/// Parse a library.json file
pub fn parse_library(path: &Path) -> Result<Vec<LibraryItem>> {
    let content = read_file(path)?;
    parse_json(&content, &path.display().to_string())
}

/// Parse a library document that is already in memory
pub fn parse_library_str(content: &str) -> Result<Vec<LibraryItem>> {
    parse_json(content, "<memory>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_books_str() {
        let books = parse_books_str(
            r#"[
                {"_id": "1", "title": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi", "averageRating": 4.5, "reviewCount": 10},
                {"_id": "2", "title": "Emma", "author": "Jane Austen", "genre": "Classics"}
            ]"#,
        )
        .unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].rating(), 4.5);
        assert_eq!(books[1].review_count, 0);
    }

    #[test]
    fn test_parse_library_str() {
        let items = parse_library_str(
            r#"[{"bookId": "1", "shelfType": "read", "addedDate": "2024-01-01", "finishDate": "2024-02-01"}]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].shelf_type, ShelfType::Read);
        assert_eq!(items[0].finish_date.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_unknown_shelf_is_parse_error() {
        let result = parse_library_str(r#"[{"bookId": "1", "shelfType": "abandoned"}]"#);
        assert!(matches!(result, Err(CatalogError::ParseError { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_books(Path::new("/definitely/not/here/books.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
