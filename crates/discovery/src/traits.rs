//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a catalog.

use crate::criteria::FilterCriteria;
use catalog::Book;

/// Core trait for filtering books.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across request handlers
/// - Filters take ownership of the Vec of borrowed books and return the
///   survivors, so no book is ever cloned while filtering
/// - A filter must keep the relative order of the books it keeps; the
///   sort stage relies on it for stable tie-breaking
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of books.
    ///
    /// Filters never fail: a criterion that makes no sense restricts nothing.
    fn apply<'a>(&self, books: Vec<&'a Book>, criteria: &FilterCriteria) -> Vec<&'a Book>;
}
