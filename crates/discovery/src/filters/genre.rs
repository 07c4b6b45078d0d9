//! Filter to keep only books in the ticked genres.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Book;

/// Keeps books whose genre is in `criteria.genres`.
///
/// An empty genre set means "all genres" and keeps everything. Genre names
/// are compared exactly, the way the genre checkboxes submit them.
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, criteria: &FilterCriteria) -> Vec<&'a Book> {
        if criteria.genres.is_empty() {
            return books;
        }
        books
            .into_iter()
            .filter(|book| criteria.genres.contains(book.genre.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_books() -> Vec<Book> {
        vec![
            Book::new("1", "Dune", "Frank Herbert", "Sci-Fi"),
            Book::new("2", "Emma", "Jane Austen", "Classics"),
            Book::new("3", "Hamlet", "William Shakespeare", "Drama"),
        ]
    }

    #[test]
    fn test_genre_filter() {
        let books = create_test_books();
        let criteria = FilterCriteria::new().with_genres(["Sci-Fi", "Drama"]);

        let filtered = GenreFilter.apply(books.iter().collect(), &criteria);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "3");
    }

    #[test]
    fn test_empty_genre_set_keeps_all() {
        let books = create_test_books();
        let filtered = GenreFilter.apply(books.iter().collect(), &FilterCriteria::new());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_genre_match_is_exact() {
        let books = create_test_books();
        let criteria = FilterCriteria::new().with_genre("sci-fi");

        let filtered = GenreFilter.apply(books.iter().collect(), &criteria);
        assert!(filtered.is_empty());
    }
}
