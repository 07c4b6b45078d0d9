//! # Recommend Crate
//!
//! Genre-affinity recommendations for the "you might like" surfaces.
//!
//! ## Components
//!
//! ### Reader Context
//! Everything the ranker needs about one reader, gathered once:
//! - Books on any shelf (never recommended)
//! - Favorite genres: genres of finished books, in catalog order
//!
//! ### Recommendation Ranker
//! Orders unshelved books with favorite genres first and by rating within
//! each block, reusing the browse `rating` comparator so ties keep
//! catalog order.
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommend::{RecommendationRanker, HOME_LIMIT};
//!
//! let snapshot = catalog::load_snapshot(Path::new("data/sample"))?;
//! let set = RecommendationRanker::new()
//!     .with_limit(HOME_LIMIT)
//!     .rank(snapshot.catalog.books(), snapshot.library.items());
//!
//! for book in &set.books {
//!     println!("{} by {}", book.title, book.author);
//! }
//! ```

// Public modules
pub mod ranker;
pub mod reader_context;

// Re-export commonly used types
pub use ranker::{
    recommend, EmptyReason, RecommendationRanker, RecommendationSet, DEFAULT_LIMIT, HOME_LIMIT,
};
pub use reader_context::{build_reader_context, ReaderContext};
