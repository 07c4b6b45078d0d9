//! Simple test harness for the BookWorm service.
//!
//! This binary exercises the end-to-end path against a data directory:
//! browse, recommendations and the reading summary.

use anyhow::Result;
use chrono::Datelike;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::{BookwormService, BrowseRequest, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,discovery=debug")),
        )
        .init();

    info!("Starting BookWorm service test harness");

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data/sample".to_string());
    let service = BookwormService::load(&data_dir, ServiceConfig::default()).await?;

    let page = service.browse(BrowseRequest::new()).await?;
    info!(
        "Browse page 1 of {} ({} books):",
        page.total_pages, page.total_count
    );
    for (i, book) in page.results.iter().enumerate() {
        info!(
            "{}. {} by {} [{}] - {:.1}",
            i + 1,
            book.title,
            book.author,
            book.genre,
            book.average_rating
        );
    }

    let recommendations = service.home_recommendations().await?;
    info!("{}", recommendations.headline());
    for book in &recommendations.books {
        info!("   {} ({:.1})", book.title, book.average_rating);
    }

    let year = chrono::Utc::now().year();
    let summary = service.reading_summary(year, 12).await?;
    info!(
        "{}: {} books finished, {} pages read, {}% of goal",
        year,
        summary.books_read_this_year,
        summary.pages_read,
        summary.goal.rounded_percent()
    );

    Ok(())
}
