//! Request and response shapes exchanged with the presentation layer.
//!
//! Everything serializes with camelCase keys.

use catalog::{Book, BookId, LibraryItem, ShelfType};
use discovery::{FilterCriteria, Page, SortKey};
use recommend::EmptyReason;
use serde::{Deserialize, Serialize};

/// A browse call: filters, ordering and which page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseRequest {
    pub search: String,
    pub genres: Vec<String>,
    pub min_rating: f32,
    pub sort: SortKey,
    /// 1-based; anything below 1 is read as 1
    pub page: usize,
    /// Falls back to the service's configured page size
    pub page_size: Option<usize>,
}

impl BrowseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_search(self.search.clone())
            .with_genres(self.genres.iter().cloned())
            .with_min_rating(self.min_rating)
    }
}

/// A book card as the presentation layer renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover_image_url: String,
    pub total_pages: u32,
    /// Effective rating: missing ratings read as 0
    pub average_rating: f32,
    pub review_count: u32,
    pub added_to_shelves_count: u32,
    /// The reader's shelf for this book, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf: Option<ShelfType>,
}

impl BookSummary {
    pub fn new(book: &Book, shelf: Option<ShelfType>) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            cover_image_url: book.cover_image_url.clone(),
            total_pages: book.total_pages,
            average_rating: book.rating(),
            review_count: book.review_count,
            added_to_shelves_count: book.added_to_shelves_count,
            shelf,
        }
    }
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self::new(book, None)
    }
}

/// One browse page of book cards
pub type BrowseResponse = Page<BookSummary>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub books: Vec<BookSummary>,
    pub favorite_genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyReason>,
}

impl RecommendationResponse {
    /// Line shown above the list
    pub fn headline(&self) -> String {
        if let Some(reason) = self.empty_reason {
            return reason.message().to_string();
        }
        if self.favorite_genres.is_empty() {
            "Top rated books to start with".to_string()
        } else {
            format!(
                "Based on your reading history in {}",
                self.favorite_genres.join(", ")
            )
        }
    }
}

/// A library item joined with its catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    #[serde(flatten)]
    pub item: LibraryItem,
    /// `None` when the book has left the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<BookSummary>,
}
