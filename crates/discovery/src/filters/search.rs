//! Filter for the free-text search box.
//!
//! Matches the lowercased search text as a substring of the lowercased
//! title or author.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Book;

/// Keeps books whose title or author contains `criteria.search`.
pub struct SearchFilter;

impl SearchFilter {
    /// Does `book` match the already-lowercased `needle`?
    pub fn matches(book: &Book, needle: &str) -> bool {
        book.title.to_lowercase().contains(needle) || book.author.to_lowercase().contains(needle)
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, criteria: &FilterCriteria) -> Vec<&'a Book> {
        let needle = match criteria.search_needle() {
            Some(needle) => needle,
            None => return books,
        };
        books
            .into_iter()
            .filter(|book| Self::matches(book, &needle))
            .collect()
    }
}
