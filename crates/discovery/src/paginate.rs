//! Page slicing for result lists.

use serde::Serialize;

/// One page of a larger result list plus the counts a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub results: Vec<T>,
    /// Size of the whole list before slicing
    pub total_count: usize,
    /// Never less than 1, even for an empty list
    pub total_pages: usize,
    /// The 1-based page that was requested
    pub page: usize,
    /// The page size actually used
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page >= 1 && self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Map the entries while keeping the counts.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// `ceil(total_count / page_size)`, at least 1. A page size of 0 counts as 1.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1)).max(1)
}

/// Cut page `page` (1-based) of `page_size` entries out of `items`.
///
/// Page 0 and pages past the end give empty results rather than an error.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);

    let results = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size);
            items.into_iter().skip(start).take(page_size).collect()
        }
        None => Vec::new(),
    };

    Page {
        results,
        total_count,
        total_pages,
        page,
        page_size,
    }
}
