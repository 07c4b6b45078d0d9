//! CatalogIndex building and snapshot loading.
//!
//! The index keeps books in the order the catalog source delivered them.
//! That order is the tie-break for every stable sort downstream, so it
//! must never be rebuilt from a HashMap.

use crate::error::{CatalogError, Result};
use crate::library::Library;
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Read-only catalog snapshot with id and genre lookups.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// Books in catalog order
    books: Vec<Book>,
    /// Book id -> position in `books`
    positions: HashMap<BookId, usize>,
    /// Genre name -> positions in `books`, in catalog order
    genre_index: HashMap<String, Vec<usize>>,
    /// Genre names in first-seen order
    genres: Vec<String>,
}

/// Everything one reader session needs: the catalog and their library.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub catalog: CatalogIndex,
    pub library: Library,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from books in catalog order.
    pub fn from_books(books: Vec<Book>) -> Result<Self> {
        let mut index = Self::new();
        for book in books {
            index.insert_book(book)?;
        }
        Ok(index)
    }

    /// Append a book, normalizing its rating.
    ///
    /// A rating with zero reviews behind it is dropped, and ratings outside
    /// 0..=5 are clamped.
    pub fn insert_book(&mut self, mut book: Book) -> Result<()> {
        if self.positions.contains_key(&book.id) {
            return Err(CatalogError::DuplicateBook(book.id));
        }

        if book.review_count == 0 && book.average_rating.is_some_and(|r| r != 0.0) {
            debug!("Book {} has a rating but no reviews; treating as 0.0", book.id);
            book.average_rating = Some(0.0);
        }
        if let Some(rating) = book.average_rating
            && (!rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating))
        {
            warn!("Book {} has out-of-range rating {}; clamping", book.id, rating);
            book.average_rating = Some(book.rating());
        }

        let position = self.books.len();
        match self.genre_index.get_mut(&book.genre) {
            Some(positions) => positions.push(position),
            None => {
                self.genres.push(book.genre.clone());
                self.genre_index.insert(book.genre.clone(), vec![position]);
            }
        }
        self.positions.insert(book.id.clone(), position);
        self.books.push(book);
        Ok(())
    }

    /// All books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get_book(&self, id: &str) -> Option<&Book> {
        self.positions.get(id).map(|&position| &self.books[position])
    }

    /// Books in `genre`, in catalog order
    pub fn get_books_by_genre(&self, genre: &str) -> Vec<&Book> {
        self.genre_index
            .get(genre)
            .map(|positions| positions.iter().map(|&p| &self.books[p]).collect())
            .unwrap_or_default()
    }

    /// Genre names in the order they first appear in the catalog
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Library items whose book is not in this catalog
    pub fn dangling_items<'a>(&self, library: &'a Library) -> Vec<&'a LibraryItem> {
        library
            .items()
            .iter()
            .filter(|item| !self.positions.contains_key(&item.book_id))
            .collect()
    }
}

/// Load `books.json` and `library.json` from a directory.
///
/// The two files are parsed in parallel. A missing library file means the
/// reader has not shelved anything yet; a missing catalog is an error.
pub fn load_snapshot(data_dir: &Path) -> Result<Snapshot> {
    info!("Loading catalog snapshot from {:?}", data_dir);

    let books_path = data_dir.join("books.json");
    let library_path = data_dir.join("library.json");

    let (books, items) = rayon::join(
        || parser::parse_books(&books_path),
        || {
            if library_path.exists() {
                parser::parse_library(&library_path)
            } else {
                info!("No library.json in {:?}; starting with an empty library", data_dir);
                Ok(Vec::new())
            }
        },
    );
    let books = books?;
    let items = items?;

    info!("Loaded {} books and {} library items", books.len(), items.len());

    let catalog = CatalogIndex::from_books(books)?;
    let library = Library::from_items(items)?;

    for item in catalog.dangling_items(&library) {
        warn!(
            "Library item {} ({}) references a book missing from the catalog",
            item.book_id, item.shelf_type
        );
    }

    Ok(Snapshot { catalog, library })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample")
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let index = CatalogIndex::from_books(vec![
            Book::new("c", "C", "A", "Drama"),
            Book::new("a", "A", "A", "Sci-Fi"),
            Book::new("b", "B", "A", "Drama"),
        ])
        .unwrap();

        let ids: Vec<&str> = index.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(index.genres(), &["Drama".to_string(), "Sci-Fi".to_string()]);

        let drama: Vec<&str> = index
            .get_books_by_genre("Drama")
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(drama, vec!["c", "b"]);
    }

    #[test]
    fn test_duplicate_book_is_rejected() {
        let result = CatalogIndex::from_books(vec![
            Book::new("a", "A", "A", "Drama"),
            Book::new("a", "A again", "A", "Drama"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateBook(id)) if id == "a"));
    }

    #[test]
    fn test_rating_without_reviews_is_zeroed() {
        let index =
            CatalogIndex::from_books(vec![Book::new("a", "A", "A", "Drama").with_rating(4.9, 0)]).unwrap();
        assert_eq!(index.get_book("a").unwrap().rating(), 0.0);
    }

    #[test]
    fn test_out_of_range_rating_is_clamped() {
        let index =
            CatalogIndex::from_books(vec![Book::new("a", "A", "A", "Drama").with_rating(9.0, 4)]).unwrap();
        assert_eq!(index.get_book("a").unwrap().average_rating, Some(5.0));
    }

    #[test]
    fn test_empty_queries() {
        let index = CatalogIndex::new();

        assert!(index.get_book("999").is_none());
        assert!(index.get_books_by_genre("Horror").is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_dangling_items() {
        let index = CatalogIndex::from_books(vec![Book::new("a", "A", "A", "Drama")]).unwrap();
        let mut library = Library::new();
        library.add("a", ShelfType::Read, "2024-01-01").unwrap();
        library.add("ghost", ShelfType::Read, "2024-01-01").unwrap();

        let dangling = index.dangling_items(&library);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].book_id, "ghost");
    }

    #[test]
    fn test_load_sample_snapshot() {
        let snapshot = load_snapshot(&sample_dir()).unwrap();

        assert!(snapshot.catalog.len() >= 10);
        assert!(!snapshot.library.is_empty());
        assert!(snapshot.catalog.dangling_items(&snapshot.library).is_empty());
    }

    #[test]
    fn test_load_missing_dir() {
        let result = load_snapshot(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
