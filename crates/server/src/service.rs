//! # BookWorm Service
//!
//! This module answers the presentation layer's calls:
//! 1. Browse: filter, sort and paginate the catalog
//! 2. Recommendations: genre-affinity ranking for the current reader
//! 3. Reading summary: shelf, genre, monthly and goal statistics
//! 4. Library edits: add, move, update progress, remove
//!
//! The catalog is an immutable snapshot behind an `Arc`. The library sits
//! behind a tokio `RwLock`; reads clone it under the read lock and the
//! CPU-bound core then runs on a blocking task with no lock held.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use catalog::{load_snapshot, BookId, CatalogIndex, Library, LibraryItem, ShelfType, Snapshot};
use discovery::QueryEngine;
use insights::ReadingSummary;
use recommend::RecommendationRanker;

use crate::config::ServiceConfig;
use crate::dto::{BookSummary, BrowseRequest, BrowseResponse, LibraryEntry, RecommendationResponse};
use crate::error::ServiceError;

/// Entry point for everything the presentation layer asks of the core.
#[derive(Clone)]
pub struct BookwormService {
    catalog: Arc<CatalogIndex>,
    library: Arc<RwLock<Library>>,
    engine: Arc<QueryEngine>,
    config: ServiceConfig,
}

impl BookwormService {
    /// Create a service over an already-loaded snapshot
    pub fn new(snapshot: Snapshot) -> Self {
        Self::with_config(snapshot, ServiceConfig::default())
    }

    pub fn with_config(snapshot: Snapshot, config: ServiceConfig) -> Self {
        Self {
            catalog: Arc::new(snapshot.catalog),
            library: Arc::new(RwLock::new(snapshot.library)),
            engine: Arc::new(QueryEngine::new()),
            config,
        }
    }

    /// Load `books.json` and `library.json` from `data_dir` off the async runtime.
    pub async fn load(data_dir: impl AsRef<Path>, config: ServiceConfig) -> Result<Self> {
        let start = Instant::now();
        let data_dir: PathBuf = data_dir.as_ref().to_path_buf();
        let dir_display = data_dir.display().to_string();

        let snapshot = tokio::task::spawn_blocking(move || load_snapshot(&data_dir))
            .await
            .context("Snapshot loading task panicked")?
            .with_context(|| format!("Failed to load catalog from {}", dir_display))?;

        info!(
            "Loaded {} books and {} library items from {} in {:.2?}",
            snapshot.catalog.len(),
            snapshot.library.len(),
            dir_display,
            start.elapsed()
        );
        Ok(Self::with_config(snapshot, config))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// Genre names in catalog order, for the genre checkboxes
    pub fn genres(&self) -> Vec<String> {
        self.catalog.genres().to_vec()
    }

    async fn library_snapshot(&self) -> Library {
        self.library.read().await.clone()
    }

    /// One page of browse results.
    ///
    /// A page below 1 is clamped to 1; the engine itself only guarantees an
    /// empty page for it.
    #[instrument(skip(self, request), fields(page = request.page, sort = %request.sort))]
    pub async fn browse(&self, request: BrowseRequest) -> Result<BrowseResponse> {
        let start = Instant::now();
        let page = request.page.max(1);
        let page_size = request.page_size.unwrap_or(self.config.page_size);
        let criteria = request.criteria();
        let sort = request.sort;

        let library = self.library_snapshot().await;
        let catalog = Arc::clone(&self.catalog);
        let engine = Arc::clone(&self.engine);

        let response = tokio::task::spawn_blocking(move || {
            let shelves: HashMap<&str, ShelfType> = library
                .items()
                .iter()
                .map(|item| (item.book_id.as_str(), item.shelf_type))
                .collect();
            engine
                .query(catalog.books(), &criteria, sort, page, page_size)
                .map(|book| BookSummary::new(book, shelves.get(book.id.as_str()).copied()))
        })
        .await
        .context("Browse task panicked")?;

        info!(
            "Browse matched {} books, returned {} (page {}/{}) in {:.2?}",
            response.total_count,
            response.results.len(),
            response.page,
            response.total_pages,
            start.elapsed()
        );
        Ok(response)
    }

    /// Recommendations; `None` uses the configured recommendations-page length.
    #[instrument(skip(self))]
    pub async fn recommendations(&self, limit: Option<usize>) -> Result<RecommendationResponse> {
        let start = Instant::now();
        let limit = limit.unwrap_or(self.config.recommendation_limit);
        let library = self.library_snapshot().await;
        let catalog = Arc::clone(&self.catalog);

        let response = tokio::task::spawn_blocking(move || {
            let set = RecommendationRanker::new()
                .with_limit(limit)
                .rank(catalog.books(), library.items());
            RecommendationResponse {
                books: set.books.iter().map(|&book| BookSummary::from(book)).collect(),
                favorite_genres: set.favorite_genres,
                empty_reason: set.empty_reason,
            }
        })
        .await
        .context("Recommendation task panicked")?;

        info!(
            "Ranked {} recommendations in {:.2?}",
            response.books.len(),
            start.elapsed()
        );
        Ok(response)
    }

    /// The shorter list shown on the home page
    pub async fn home_recommendations(&self) -> Result<RecommendationResponse> {
        self.recommendations(Some(self.config.home_limit)).await
    }

    #[instrument(skip(self))]
    pub async fn reading_summary(&self, year: i32, annual_goal: u32) -> Result<ReadingSummary> {
        let library = self.library_snapshot().await;
        let catalog = Arc::clone(&self.catalog);

        let summary = tokio::task::spawn_blocking(move || {
            ReadingSummary::build(catalog.books(), library.items(), year, annual_goal)
        })
        .await
        .context("Reading summary task panicked")?;

        info!(
            "Reading summary for {}: {} finished, goal {:.0}%",
            year, summary.books_read_this_year, summary.goal.percent
        );
        Ok(summary)
    }

    /// Shelve a catalog book for the first time, dated today.
    pub async fn add_to_shelf(&self, book_id: &str, shelf: ShelfType) -> Result<LibraryItem> {
        if self.catalog.get_book(book_id).is_none() {
            return Err(ServiceError::UnknownBook(book_id.to_string()).into());
        }
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();

        let mut library = self.library.write().await;
        let item = library
            .add(BookId::from(book_id), shelf, today)
            .with_context(|| format!("Failed to add {} to {}", book_id, shelf.label()))?
            .clone();
        info!("Added {} to {}", book_id, shelf);
        Ok(item)
    }

    pub async fn move_to_shelf(&self, book_id: &str, shelf: ShelfType) -> Result<LibraryItem> {
        let mut library = self.library.write().await;
        let item = library
            .move_to_shelf(book_id, shelf)
            .with_context(|| format!("Failed to move {} to {}", book_id, shelf.label()))?
            .clone();
        info!("Moved {} to {}", book_id, shelf);
        Ok(item)
    }

    pub async fn update_progress(&self, book_id: &str, pages_read: u32) -> Result<LibraryItem> {
        let mut library = self.library.write().await;
        let item = library
            .update_progress(book_id, pages_read)
            .with_context(|| format!("Failed to record progress for {}", book_id))?
            .clone();
        Ok(item)
    }

    /// Remove a book from every shelf, returning what it looked like
    pub async fn remove_from_library(&self, book_id: &str) -> Result<LibraryItem> {
        let mut library = self.library.write().await;
        let item = library
            .remove(book_id)
            .with_context(|| format!("Failed to remove {} from the library", book_id))?;
        info!("Removed {} from the library", book_id);
        Ok(item)
    }

    pub async fn library_items(&self) -> Vec<LibraryItem> {
        self.library.read().await.items().to_vec()
    }

    /// Library items joined with their books, optionally for one shelf only
    pub async fn library_entries(&self, shelf: Option<ShelfType>) -> Vec<LibraryEntry> {
        let library = self.library.read().await;
        library
            .items()
            .iter()
            .filter(|item| shelf.is_none_or(|s| item.shelf_type == s))
            .map(|item| LibraryEntry {
                item: item.clone(),
                book: self
                    .catalog
                    .get_book(&item.book_id)
                    .map(|book| BookSummary::new(book, Some(item.shelf_type))),
            })
            .collect()
    }
}
