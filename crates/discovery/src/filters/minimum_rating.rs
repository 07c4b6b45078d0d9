//! Filter to enforce the minimum-rating radio buttons.
//!
//! Removes books whose average rating is below the reader's threshold.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Book;

/// Removes books rated below `criteria.min_rating`.
///
/// ## Algorithm
/// 1. Take the effective threshold (`FilterCriteria::rating_floor`)
/// 2. Keep books with `rating() >= threshold` (inclusive)
///
/// Unrated books count as 0.0, so any positive threshold removes them.
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, criteria: &FilterCriteria) -> Vec<&'a Book> {
        let floor = criteria.rating_floor();
        if floor == 0.0 {
            return books;
        }
        books
            .into_iter()
            .filter(|book| book.rating() >= floor)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_books() -> Vec<Book> {
        vec![
            Book::new("1", "High Rated", "A", "Drama").with_rating(4.5, 20),
            Book::new("2", "Low Rated", "B", "Drama").with_rating(2.0, 20),
            Book::new("3", "Exactly Four", "C", "Drama").with_rating(4.0, 5),
            Book::new("4", "Unrated", "D", "Drama"),
        ]
    }

    #[test]
    fn test_minimum_rating_filter() {
        let books = create_test_books();
        let criteria = FilterCriteria::new().with_min_rating(4.0);

        let filtered = MinimumRatingFilter.apply(books.iter().collect(), &criteria);

        let ids: Vec<&str> = filtered.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_zero_threshold_keeps_unrated() {
        let books = create_test_books();
        let filtered = MinimumRatingFilter.apply(books.iter().collect(), &FilterCriteria::new());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_negative_threshold_is_no_restriction() {
        let books = create_test_books();
        let criteria = FilterCriteria::new().with_min_rating(-3.0);

        let filtered = MinimumRatingFilter.apply(books.iter().collect(), &criteria);
        assert_eq!(filtered.len(), 4);
    }
}
