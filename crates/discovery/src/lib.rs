//! Catalog discovery: filtering, sorting and pagination of books.
//!
//! This crate provides:
//! - FilterCriteria describing what the reader typed and ticked
//! - Filter trait and implementations (search, genre, minimum rating)
//! - FilterPipeline for composing filters
//! - SortKey comparators shared with the recommendation ranker
//! - Page slicing and the `query` entry point
//!
//! ## Architecture
//! A browse request is processed in stages:
//! 1. Filters remove books that do not match (order-preserving)
//! 2. The survivors are stable-sorted by the chosen key
//! 3. The requested page is cut out, along with total counts
//!
//! ## Example Usage
//! ```ignore
//! use discovery::{query, FilterCriteria, SortKey};
//!
//! let criteria = FilterCriteria::new()
//!     .with_search("le guin")
//!     .with_genre("Sci-Fi")
//!     .with_min_rating(4.0);
//!
//! let page = query(catalog.books(), &criteria, SortKey::Rating, 1, 6);
//! println!("{} of {} books", page.results.len(), page.total_count);
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod paginate;
pub mod query;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::FilterCriteria;
pub use filter_pipeline::FilterPipeline;
pub use paginate::{paginate, total_pages, Page};
pub use query::{query, QueryEngine, QueryPage};
pub use sort::{by_rating_desc, by_shelved_desc, sort_books, SortKey};
pub use traits::Filter;
