//! Server crate for the BookWorm reading tracker.
//!
//! This crate contains the service that the presentation layer calls: it
//! owns the catalog snapshot and the reader's library and runs the pure
//! discovery, recommendation and insight code on their behalf.

pub mod config;
pub mod dto;
pub mod error;
pub mod service;

pub use config::{ServiceConfig, DEFAULT_PAGE_SIZE};
pub use dto::{BookSummary, BrowseRequest, BrowseResponse, LibraryEntry, RecommendationResponse};
pub use error::ServiceError;
pub use service::BookwormService;
