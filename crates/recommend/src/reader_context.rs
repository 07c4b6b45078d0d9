//! Helper functions to build a ReaderContext from a library
//!
//! This module gathers what the ranker needs to know about a reader
//! into one struct so ranking never rescans the library.

use catalog::{Book, BookId, LibraryItem, ShelfType};
use std::collections::HashSet;

/// What the ranker knows about one reader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderContext {
    /// Every book on any shelf
    pub shelved: HashSet<BookId>,
    /// Books on the `read` shelf
    pub read: HashSet<BookId>,
    /// Genres of read books, distinct, in catalog order
    pub favorite_genres: Vec<String>,
}

impl ReaderContext {
    pub fn is_shelved(&self, book_id: &str) -> bool {
        self.shelved.contains(book_id)
    }

    pub fn is_favorite_genre(&self, genre: &str) -> bool {
        self.favorite_genres.iter().any(|g| g == genre)
    }

    /// True when the reader has not finished anything yet
    pub fn has_no_history(&self) -> bool {
        self.favorite_genres.is_empty()
    }
}

/// Build a ReaderContext from the catalog and the reader's library.
///
/// This function aggregates:
/// - Books on any shelf (excluded from recommendations)
/// - Books on the read shelf
/// - Favorite genres: genres of read books, walked in catalog order
///
/// Library items pointing at books missing from the catalog still count as
/// shelved but contribute no genre.
pub fn build_reader_context(books: &[Book], items: &[LibraryItem]) -> ReaderContext {
    let mut context = ReaderContext::default();

    for item in items {
        context.shelved.insert(item.book_id.clone());
        if item.shelf_type == ShelfType::Read {
            context.read.insert(item.book_id.clone());
        }
    }

    if context.read.is_empty() {
        return context;
    }

    for book in books {
        if context.read.contains(&book.id) && !context.is_favorite_genre(&book.genre) {
            context.favorite_genres.push(book.genre.clone());
        }
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_books() -> Vec<Book> {
        vec![
            Book::new("1", "Dune", "Frank Herbert", "Sci-Fi"),
            Book::new("2", "Hamlet", "William Shakespeare", "Drama"),
            Book::new("3", "Emma", "Jane Austen", "Classics"),
            Book::new("4", "Foundation", "Isaac Asimov", "Sci-Fi"),
        ]
    }

    #[test]
    fn test_build_reader_context_basic() {
        let books = create_test_books();
        let items = vec![
            LibraryItem::new("1", ShelfType::Read),
            LibraryItem::new("2", ShelfType::WantToRead),
            LibraryItem::new("3", ShelfType::CurrentlyReading),
        ];

        let context = build_reader_context(&books, &items);

        assert_eq!(context.shelved.len(), 3);
        assert_eq!(context.read.len(), 1);
        assert!(context.is_shelved("2"));
        assert!(!context.is_shelved("4"));
        assert_eq!(context.favorite_genres, vec!["Sci-Fi"]);
    }

    #[test]
    fn test_favorite_genres_follow_catalog_order() {
        let books = create_test_books();
        // library order is the reverse of catalog order
        let items = vec![
            LibraryItem::new("4", ShelfType::Read),
            LibraryItem::new("3", ShelfType::Read),
            LibraryItem::new("1", ShelfType::Read),
        ];

        let context = build_reader_context(&books, &items);

        assert_eq!(context.favorite_genres, vec!["Sci-Fi", "Classics"]);
        assert!(context.is_favorite_genre("Classics"));
        assert!(!context.is_favorite_genre("Drama"));
    }

    #[test]
    fn test_unknown_book_is_shelved_without_genre() {
        let books = create_test_books();
        let items = vec![LibraryItem::new("missing", ShelfType::Read)];

        let context = build_reader_context(&books, &items);

        assert!(context.is_shelved("missing"));
        assert!(context.has_no_history());
    }

    #[test]
    fn test_empty_library() {
        let context = build_reader_context(&create_test_books(), &[]);
        assert_eq!(context, ReaderContext::default());
    }
}
