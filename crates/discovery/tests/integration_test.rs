//! Integration tests for the browse query.
//!
//! These tests verify that filtering, sorting and pagination work together
//! on realistic catalogs.

use catalog::Book;
use discovery::filters::SearchFilter;
use discovery::{query, total_pages, FilterCriteria, SortKey};

fn shelf_catalog() -> Vec<Book> {
    vec![
        Book::new("1", "Dune", "Frank Herbert", "Sci-Fi").with_rating(4.5, 900),
        Book::new("2", "Hamlet", "William Shakespeare", "Drama").with_rating(4.8, 700),
        Book::new("3", "Dune Messiah", "Frank Herbert", "Sci-Fi").with_rating(3.0, 300),
    ]
}

fn five_books() -> Vec<Book> {
    vec![
        Book::new("a", "Emma", "Jane Austen", "Classics").with_rating(3.9, 410),
        Book::new("b", "Project Hail Mary", "Andy Weir", "Sci-Fi").with_rating(4.7, 820),
        Book::new("c", "The Hobbit", "J.R.R. Tolkien", "Fantasy").with_rating(4.2, 1300),
        Book::new("d", "Educated", "Tara Westover", "Non-Fiction").with_rating(4.4, 640),
        Book::new("e", "Gone Girl", "Gillian Flynn", "Thriller").with_rating(4.1, 980),
    ]
}

/// A larger catalog with plenty of rating ties and shelf-count ties.
fn tied_catalog() -> Vec<Book> {
    let genres = ["Sci-Fi", "Drama", "Fantasy", "Classics"];
    (0..40u32)
        .map(|i| {
            Book::new(
                format!("book-{i:02}"),
                format!("Title {i}"),
                format!("Author {}", i % 7),
                genres[(i % 4) as usize],
            )
            .with_rating(3.0 + (i % 5) as f32 * 0.5, 10)
            .with_shelved_count(i % 3)
        })
        .collect()
}

fn ids<'a>(books: &[&'a Book]) -> Vec<&'a str> {
    books.iter().map(|b| b.id.as_str()).collect()
}

fn position(catalog: &[Book], id: &str) -> usize {
    catalog.iter().position(|b| b.id == id).unwrap()
}

#[test]
fn test_top_two_by_rating() {
    let books = five_books();

    let page = query(&books, &FilterCriteria::new(), SortKey::Rating, 1, 2);

    assert_eq!(ids(&page.results), vec!["b", "d"]);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn test_min_rating_leaves_single_book() {
    let books = shelf_catalog();
    let criteria = FilterCriteria::new().with_min_rating(4.6);

    let page = query(&books, &criteria, SortKey::Rating, 1, 6);

    assert_eq!(ids(&page.results), vec!["2"]);
    assert_eq!(page.total_count, 1);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_results_satisfy_criteria() {
    let books = tied_catalog();
    let criteria = FilterCriteria::new()
        .with_search("AUTHOR 3")
        .with_genres(["Sci-Fi", "Fantasy"])
        .with_min_rating(3.5);
    let needle = criteria.search_needle().unwrap();

    let page = query(&books, &criteria, SortKey::Shelved, 1, 100);

    assert!(!page.results.is_empty());
    for book in &page.results {
        assert!(books.iter().any(|b| b.id == book.id));
        assert!(SearchFilter::matches(book, &needle));
        assert!(criteria.genres.contains(&book.genre));
        assert!(book.rating() >= 3.5);
    }
}

#[test]
fn test_total_count_independent_of_page_and_sort() {
    let books = tied_catalog();
    let criteria = FilterCriteria::new().with_genre("Drama").with_min_rating(3.5);
    let expected = books
        .iter()
        .filter(|b| b.genre == "Drama" && b.rating() >= 3.5)
        .count();

    for key in SortKey::ALL {
        for page_size in [1, 3, 6, 50] {
            for page in [0, 1, 2, 9] {
                let result = query(&books, &criteria, key, page, page_size);
                assert_eq!(result.total_count, expected);
                assert_eq!(result.total_pages, total_pages(expected, page_size));
            }
        }
    }
}

#[test]
fn test_ties_keep_catalog_order() {
    let books = tied_catalog();

    for key in [SortKey::Rating, SortKey::Shelved] {
        let page = query(&books, &FilterCriteria::new(), key, 1, books.len());

        for pair in page.results.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if key.compare(a, b).is_eq() {
                assert!(
                    position(&books, &a.id) < position(&books, &b.id),
                    "{} and {} tie under {} but swapped",
                    a.id,
                    b.id,
                    key
                );
            } else {
                assert!(key.compare(a, b).is_lt());
            }
        }
    }
}

#[test]
fn test_pages_cover_sorted_set_exactly_once() {
    let books = tied_catalog();
    let criteria = FilterCriteria::new().with_min_rating(3.5);
    let everything = query(&books, &criteria, SortKey::Rating, 1, books.len());

    for page_size in [1, 4, 6, 7] {
        let first = query(&books, &criteria, SortKey::Rating, 1, page_size);
        let mut concatenated: Vec<&Book> = Vec::new();
        for page in 1..=first.total_pages {
            let slice = query(&books, &criteria, SortKey::Rating, page, page_size);
            assert!(slice.results.len() <= page_size);
            concatenated.extend(slice.results);
        }
        assert_eq!(ids(&concatenated), ids(&everything.results));

        let past_end = query(&books, &criteria, SortKey::Rating, first.total_pages + 1, page_size);
        assert!(past_end.results.is_empty());
    }
}

#[test]
fn test_no_match_still_reports_one_page() {
    let books = five_books();
    let criteria = FilterCriteria::new().with_search("no such book");

    let page = query(&books, &criteria, SortKey::Rating, 1, 6);

    assert!(page.results.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_unrated_books_only_pass_zero_threshold() {
    let mut books = five_books();
    books.push(Book::new("f", "Untitled", "Anonymous", "Drama"));

    let all = query(&books, &FilterCriteria::new(), SortKey::Rating, 1, 10);
    assert_eq!(all.total_count, 6);
    assert_eq!(all.results.last().map(|b| b.id.as_str()), Some("f"));

    let rated = query(
        &books,
        &FilterCriteria::new().with_min_rating(0.5),
        SortKey::Rating,
        1,
        10,
    );
    assert_eq!(rated.total_count, 5);
}

#[test]
fn test_criteria_from_json() {
    let criteria: FilterCriteria =
        serde_json::from_str(r#"{"search":"weir","genres":["Sci-Fi"],"minRating":4}"#).unwrap();
    let books = five_books();

    let page = query(&books, &criteria, SortKey::Rating, 1, 6);

    assert_eq!(ids(&page.results), vec!["b"]);
}
