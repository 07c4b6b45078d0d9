//! Example: Recommend books for the sample reader
//!
//! Run with: cargo run --package recommend --example recommend_sample
//!
//! This example shows how to:
//! 1. Load the sample catalog and library
//! 2. Build the reader context
//! 3. Rank recommendations for both surfaces
//! 4. Display the results

use recommend::{build_reader_context, RecommendationRanker, HOME_LIMIT};
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== BookWorm Recommendation Example ===\n");

    let start = Instant::now();
    let snapshot = catalog::load_snapshot(Path::new("data/sample"))?;
    println!(
        "Loaded {} books and {} library items in {:?}\n",
        snapshot.catalog.len(),
        snapshot.library.len(),
        start.elapsed()
    );

    let books = snapshot.catalog.books();
    let items = snapshot.library.items();

    let context = build_reader_context(books, items);
    println!("Reader context:");
    println!("  Shelved books: {}", context.shelved.len());
    println!("  Finished books: {}", context.read.len());
    println!("  Favorite genres: {:?}\n", context.favorite_genres);

    let start = Instant::now();
    let set = RecommendationRanker::new().rank(books, items);
    println!("Recommendations page ({:?}):", start.elapsed());
    if let Some(reason) = set.empty_reason {
        println!("  {}", reason.message());
    }
    for (rank, book) in set.books.iter().enumerate() {
        println!(
            "  {:2}. {} by {} [{}] {:.1}",
            rank + 1,
            book.title,
            book.author,
            book.genre,
            book.rating()
        );
    }

    let home = RecommendationRanker::new().with_limit(HOME_LIMIT).rank(books, items);
    println!("\nHome page strip: {} books", home.len());

    Ok(())
}
