//! Core domain types for the reading tracker.
//!
//! This module defines the plain data that every other crate consumes:
//! catalog entries (`Book`), a reader's shelf entries (`LibraryItem`)
//! and the three shelves (`ShelfType`).
//!
//! Field names serialize in camelCase so the structs read and write the
//! same JSON documents the catalog and library APIs exchange.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a book (an opaque API id such as a Mongo ObjectId)
pub type BookId = String;

/// Highest average rating a book can carry
pub const MAX_RATING: f32 = 5.0;

// =============================================================================
// Book
// =============================================================================

/// A catalog entry.
///
/// `average_rating` is optional because the API omits it for books nobody
/// has reviewed. Use [`Book::rating`] wherever a number is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(alias = "_id")]
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Matches the name of a genre managed by the admin surface
    pub genre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "coverImage")]
    pub cover_image_url: String,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub average_rating: Option<f32>,
    #[serde(default)]
    pub review_count: u32,
    /// How many readers have put this book on any shelf (popularity signal)
    #[serde(default)]
    pub added_to_shelves_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Create a book with the fields every catalog entry must have.
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            description: String::new(),
            cover_image_url: String::new(),
            total_pages: 0,
            average_rating: None,
            review_count: 0,
            added_to_shelves_count: 0,
            created_at: None,
        }
    }

    /// Set the average rating and the number of reviews behind it
    pub fn with_rating(mut self, average_rating: f32, review_count: u32) -> Self {
        self.average_rating = Some(average_rating);
        self.review_count = review_count;
        self
    }

    /// Set the shelf-addition count
    pub fn with_shelved_count(mut self, count: u32) -> Self {
        self.added_to_shelves_count = count;
        self
    }

    /// Set the total page count
    pub fn with_pages(mut self, pages: u32) -> Self {
        self.total_pages = pages;
        self
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// The rating used for filtering and ordering.
    ///
    /// A missing or non-finite rating reads as 0.0, negatives as 0.0 and
    /// anything above [`MAX_RATING`] as [`MAX_RATING`].
    pub fn rating(&self) -> f32 {
        match self.average_rating {
            Some(r) if r.is_finite() => r.clamp(0.0, MAX_RATING),
            _ => 0.0,
        }
    }
}

// =============================================================================
// Shelves
// =============================================================================

/// The three shelves a reader can put a book on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShelfType {
    WantToRead,
    CurrentlyReading,
    Read,
}

impl ShelfType {
    /// All shelves in display order
    pub const ALL: [ShelfType; 3] = [
        ShelfType::WantToRead,
        ShelfType::CurrentlyReading,
        ShelfType::Read,
    ];

    /// The wire name used by the library API
    pub fn as_str(&self) -> &'static str {
        match self {
            ShelfType::WantToRead => "wantToRead",
            ShelfType::CurrentlyReading => "currentlyReading",
            ShelfType::Read => "read",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ShelfType::WantToRead => "Want to Read",
            ShelfType::CurrentlyReading => "Currently Reading",
            ShelfType::Read => "Read",
        }
    }
}

impl fmt::Display for ShelfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShelfType {
    type Err = String;

    /// Accepts the wire names plus kebab/snake spellings for the CLI
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "wanttoread" | "want" => Ok(ShelfType::WantToRead),
            "currentlyreading" | "reading" => Ok(ShelfType::CurrentlyReading),
            "read" | "finished" => Ok(ShelfType::Read),
            _ => Err(format!("unknown shelf: {}", s)),
        }
    }
}

// =============================================================================
// LibraryItem
// =============================================================================

/// A book on one of the reader's shelves.
///
/// Dates are kept as the strings the API sends (RFC 3339 or `YYYY-MM-DD`);
/// use the accessor methods to get parsed dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub book_id: BookId,
    pub shelf_type: ShelfType,
    #[serde(default)]
    pub added_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_read: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<String>,
}

impl LibraryItem {
    /// Create an item on `shelf` with no dates or progress
    pub fn new(book_id: impl Into<BookId>, shelf: ShelfType) -> Self {
        Self {
            book_id: book_id.into(),
            shelf_type: shelf,
            added_date: String::new(),
            pages_read: None,
            start_date: None,
            finish_date: None,
        }
    }

    /// Set the date the book was added to the library
    pub fn with_added_date(mut self, date: impl Into<String>) -> Self {
        self.added_date = date.into();
        self
    }

    /// Set the date the reader finished the book
    pub fn with_finish_date(mut self, date: impl Into<String>) -> Self {
        self.finish_date = Some(date.into());
        self
    }

    /// Set the reading progress in pages
    pub fn with_pages_read(mut self, pages: u32) -> Self {
        self.pages_read = Some(pages);
        self
    }

    pub fn added_on(&self) -> Option<NaiveDate> {
        parse_date(&self.added_date)
    }

    /// The day the book was finished, falling back to the day it was added
    pub fn finished_on(&self) -> Option<NaiveDate> {
        self.finish_date
            .as_deref()
            .and_then(parse_date)
            .or_else(|| self.added_on())
    }
}

/// Parse an API date: a full RFC 3339 timestamp or a bare `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}
