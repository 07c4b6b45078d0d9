//! Sort keys and the comparators behind them.
//!
//! Every ordering here is used with a stable sort, so books that compare
//! equal keep the order they had in the catalog.

use catalog::Book;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The ordering selected in the browse "Sort by" dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest average rating first
    #[default]
    Rating,
    /// Most shelf additions first
    Shelved,
    /// Most recently created first
    Newest,
    /// Least recently created first
    Oldest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Rating,
        SortKey::Shelved,
        SortKey::Newest,
        SortKey::Oldest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Shelved => "shelved",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }

    /// Compare two books under this key. `Less` means `a` is listed first.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Rating => by_rating_desc(a, b),
            SortKey::Shelved => by_shelved_desc(a, b),
            // None < Some(_), so undated books land at the end of "newest"
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::Oldest => a.created_at.cmp(&b.created_at),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "shelved" => Ok(SortKey::Shelved),
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            other => Err(format!(
                "unknown sort key '{}' (expected rating, shelved, newest or oldest)",
                other
            )),
        }
    }
}

/// Descending by effective rating.
///
/// Ratings are finite after [`Book::rating`], so `partial_cmp` only falls
/// back to `Equal` for values that really are equal.
pub fn by_rating_desc(a: &Book, b: &Book) -> Ordering {
    b.rating().partial_cmp(&a.rating()).unwrap_or(Ordering::Equal)
}

/// Descending by shelf-addition count
pub fn by_shelved_desc(a: &Book, b: &Book) -> Ordering {
    b.added_to_shelves_count.cmp(&a.added_to_shelves_count)
}

/// Stable in-place sort of `books` by `key`.
pub fn sort_books(books: &mut [&Book], key: SortKey) {
    books.sort_by(|a, b| key.compare(a, b));
}
