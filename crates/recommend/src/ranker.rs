//! Genre-affinity ranking for "you might like" lists.
//!
//! ## Algorithm
//! 1. Build the reader context (shelved books, favorite genres)
//! 2. Drop every book already on a shelf
//! 3. Stable-sort the rest: favorite genres first, then by rating
//!    (the browse `rating` comparator), catalog order on ties
//! 4. Keep the first `limit`

use crate::reader_context::{build_reader_context, ReaderContext};
use catalog::{Book, LibraryItem};
use discovery::by_rating_desc;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Entries shown on the recommendations page
pub const DEFAULT_LIMIT: usize = 12;

/// Entries shown in the home page strip
pub const HOME_LIMIT: usize = 6;

/// Why a recommendation list came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyReason {
    /// There are no books at all
    EmptyCatalog,
    /// Every catalog book is already on one of the reader's shelves
    AllShelved,
    /// The caller asked for zero entries
    ZeroLimit,
}

impl EmptyReason {
    /// Message for an empty recommendations page
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::EmptyCatalog => "No books in the catalog yet.",
            EmptyReason::AllShelved => {
                "You've shelved every book we have. Check back when new titles arrive."
            }
            EmptyReason::ZeroLimit => "No recommendations requested.",
        }
    }
}

/// The ranked list plus what explains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet<'a> {
    pub books: Vec<&'a Book>,
    /// Genres the ranking favored, in catalog order
    pub favorite_genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyReason>,
}

impl RecommendationSet<'_> {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the list leans on the reader's history
    pub fn is_personalized(&self) -> bool {
        !self.favorite_genres.is_empty()
    }
}

/// Ranks unshelved books for one reader.
#[derive(Debug, Clone)]
pub struct RecommendationRanker {
    limit: usize,
}

impl RecommendationRanker {
    /// Ranker producing up to [`DEFAULT_LIMIT`] entries
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }

    /// Configure the maximum number of entries (default: 12)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank `books` for the reader whose library is `items`.
    #[instrument(skip(self, books, items), fields(catalog = books.len(), library = items.len(), limit = self.limit))]
    pub fn rank<'a>(&self, books: &'a [Book], items: &[LibraryItem]) -> RecommendationSet<'a> {
        let context = build_reader_context(books, items);
        let ranked = self.rank_with_context(books, &context);

        let empty_reason = if books.is_empty() {
            Some(EmptyReason::EmptyCatalog)
        } else if self.limit == 0 {
            Some(EmptyReason::ZeroLimit)
        } else if ranked.is_empty() {
            Some(EmptyReason::AllShelved)
        } else {
            None
        };

        debug!(
            "Ranked {} recommendations ({} favorite genres)",
            ranked.len(),
            context.favorite_genres.len()
        );

        RecommendationSet {
            books: ranked,
            favorite_genres: context.favorite_genres,
            empty_reason,
        }
    }

    /// Rank against an already-built context.
    pub fn rank_with_context<'a>(&self, books: &'a [Book], context: &ReaderContext) -> Vec<&'a Book> {
        if self.limit == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<&'a Book> = books
            .iter()
            .filter(|book| !context.is_shelved(&book.id))
            .collect();

        if context.has_no_history() {
            candidates.sort_by(|a, b| by_rating_desc(a, b));
        } else {
            candidates.sort_by(|a, b| favorites_first(context, a, b).then_with(|| by_rating_desc(a, b)));
        }

        candidates.truncate(self.limit);
        candidates
    }
}

impl Default for RecommendationRanker {
    fn default() -> Self {
        Self::new()
    }
}

fn favorites_first(context: &ReaderContext, a: &Book, b: &Book) -> Ordering {
    let a_fav = context.is_favorite_genre(&a.genre);
    let b_fav = context.is_favorite_genre(&b.genre);
    b_fav.cmp(&a_fav)
}

/// Rank `books` for a reader and keep the first `limit`.
pub fn recommend<'a>(books: &'a [Book], items: &[LibraryItem], limit: usize) -> Vec<&'a Book> {
    RecommendationRanker::new()
        .with_limit(limit)
        .rank(books, items)
        .books
}
