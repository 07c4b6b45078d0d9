//! The browse query: filter, then sort, then slice.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::paginate::{paginate, Page};
use crate::sort::{sort_books, SortKey};
use catalog::Book;
use tracing::debug;

/// A page of borrowed catalog entries
pub type QueryPage<'a> = Page<&'a Book>;

/// Runs browse queries through a filter pipeline.
///
/// Holds no catalog state; every call works on the snapshot it is handed.
pub struct QueryEngine {
    pipeline: FilterPipeline,
}

impl QueryEngine {
    /// Engine with the standard browse filters
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::standard(),
        }
    }

    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// Books matching `criteria`, in catalog order
    pub fn filter<'a>(&self, books: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
        self.pipeline.apply(books, criteria)
    }

    /// Filter, sort and paginate `books`.
    ///
    /// ## Algorithm
    /// 1. Run the filter pipeline (order-preserving)
    /// 2. Stable-sort the survivors by `sort_key`
    /// 3. Slice out page `page` (1-based) of `page_size`
    pub fn query<'a>(
        &self,
        books: &'a [Book],
        criteria: &FilterCriteria,
        sort_key: SortKey,
        page: usize,
        page_size: usize,
    ) -> QueryPage<'a> {
        let mut matched = self.filter(books, criteria);
        sort_books(&mut matched, sort_key);

        let result = paginate(matched, page, page_size);
        debug!(
            catalog = books.len(),
            matched = result.total_count,
            sort = %sort_key,
            page,
            returned = result.results.len(),
            "Browse query evaluated"
        );
        result
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a browse query with the standard filters.
pub fn query<'a>(
    books: &'a [Book],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> QueryPage<'a> {
    QueryEngine::new().query(books, criteria, sort_key, page, page_size)
}
