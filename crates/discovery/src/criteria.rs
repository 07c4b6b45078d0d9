//! Filter criteria for a browse query.
//!
//! Built fresh for every query from whatever the reader typed and ticked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a book must match to show up in browse results.
///
/// The default value restricts nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and author
    pub search: String,
    /// Genre names; empty means every genre
    pub genres: BTreeSet<String>,
    /// Inclusive lower bound on the average rating; 0 means no bound
    pub min_rating: f32,
}

impl FilterCriteria {
    /// Criteria that let every book through
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// The rating threshold actually applied.
    ///
    /// Negative, NaN or infinite thresholds collapse to 0 (no restriction).
    pub fn rating_floor(&self) -> f32 {
        if self.min_rating.is_finite() && self.min_rating > 0.0 {
            self.min_rating
        } else {
            0.0
        }
    }

    /// The lowercased search text, or `None` when the search box is empty
    pub fn search_needle(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    /// True when no filter would remove anything
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && self.genres.is_empty() && self.rating_floor() == 0.0
    }
}
