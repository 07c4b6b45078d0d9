//! Browse filters.
//!
//! Each one reads a single field of `FilterCriteria` and is a no-op when
//! that field is empty.

pub mod genre;
pub mod minimum_rating;
pub mod search;

pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use search::SearchFilter;
