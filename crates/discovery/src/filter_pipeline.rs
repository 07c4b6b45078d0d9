//! The FilterPipeline chains filters over a catalog.
//!
//! This module provides the FilterPipeline struct that runs filters
//! in sequence using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{GenreFilter, MinimumRatingFilter, SearchFilter};
use crate::traits::Filter;
use catalog::Book;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumRatingFilter)
///     .add_filter(GenreFilter)
///     .add_filter(SearchFilter);
///
/// let survivors = pipeline.apply(catalog.books(), &criteria);
/// ```
///
/// Filters commute (each one is a pure predicate), so the order only
/// changes how much work later filters do, never the result.
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The browse pipeline: rating, then genre, then text search.
    ///
    /// The cheap numeric check runs first so the lowercase-and-scan
    /// search only sees books that already passed.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(MinimumRatingFilter)
            .add_filter(GenreFilter)
            .add_filter(SearchFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the registered filters, in execution order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to `books`.
    ///
    /// ## Algorithm
    /// 1. Start with every book, in catalog order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the survivors, still in catalog order
    pub fn apply<'a>(&self, books: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
        let mut current: Vec<&'a Book> = books.iter().collect();
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
