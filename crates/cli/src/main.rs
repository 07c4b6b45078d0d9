use anyhow::{Context, Result};
use catalog::ShelfType;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use colored::Colorize;
use discovery::SortKey;
use rand::Rng;
use server::{
    BookSummary, BookwormService, BrowseRequest, LibraryEntry, RecommendationResponse,
    ServiceConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::debug;

/// BookWorm - browse, shelve and get recommendations from a book catalog
#[derive(Parser)]
#[command(name = "bookworm")]
#[command(about = "Reading tracker: catalog browsing, recommendations and reading stats", long_about = None)]
struct Cli {
    /// Directory holding books.json and library.json
    #[arg(short, long, default_value = "data/sample")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search, filter and sort the catalog one page at a time
    Browse {
        /// Case-insensitive text matched against title and author
        #[arg(long, default_value = "")]
        search: String,

        /// Only show this genre (repeat for several)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Minimum average rating (inclusive)
        #[arg(long, default_value = "0")]
        min_rating: f32,

        /// rating, shelved, newest or oldest
        #[arg(long, default_value = "rating")]
        sort: SortKey,

        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,

        /// Books per page
        #[arg(long, default_value = "6")]
        page_size: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Books you might like, based on what you have read
    Recommend {
        /// Number of recommendations to return
        #[arg(long, default_value = "12")]
        limit: usize,

        #[arg(long)]
        json: bool,
    },

    /// Reading statistics and goal progress for a year
    Stats {
        /// Calendar year (defaults to the current one)
        #[arg(long)]
        year: Option<i32>,

        /// Annual reading goal in books
        #[arg(long, default_value = "12")]
        goal: u32,

        #[arg(long)]
        json: bool,
    },

    /// Show or edit the shelves (edits are not written back to disk)
    Library {
        #[command(subcommand)]
        action: Option<LibraryAction>,
    },

    /// Run benchmark to test browse performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of requests in flight at once
        #[arg(long, default_value = "16")]
        concurrent: usize,
    },
}

#[derive(Subcommand, Debug)]
enum LibraryAction {
    /// List shelved books
    List {
        /// Only this shelf (wantToRead, currentlyReading, read)
        #[arg(long)]
        shelf: Option<ShelfType>,
    },
    /// Put a catalog book on a shelf
    Add {
        #[arg(long)]
        book_id: String,
        #[arg(long)]
        shelf: ShelfType,
    },
    /// Move a shelved book to another shelf
    Move {
        #[arg(long)]
        book_id: String,
        #[arg(long)]
        shelf: ShelfType,
    },
    /// Take a book out of the library
    Remove {
        #[arg(long)]
        book_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let service = BookwormService::load(&cli.data_dir, ServiceConfig::default())
        .await
        .with_context(|| format!("Failed to open {}", cli.data_dir.display()))?;
    eprintln!(
        "{} Loaded {} books in {:?}",
        "✓".green(),
        service.catalog().len(),
        start.elapsed()
    );

    debug!("Dispatching {:?}", cli.command);
    match cli.command {
        Commands::Browse {
            search,
            genres,
            min_rating,
            sort,
            page,
            page_size,
            json,
        } => {
            let mut request = BrowseRequest::new()
                .with_search(search)
                .with_min_rating(min_rating)
                .with_sort(sort)
                .with_page(page)
                .with_page_size(page_size);
            request.genres = genres;
            handle_browse(&service, request, json).await?
        }
        Commands::Recommend { limit, json } => handle_recommend(&service, limit, json).await?,
        Commands::Stats { year, goal, json } => {
            let year = year.unwrap_or_else(|| chrono::Utc::now().year());
            handle_stats(&service, year, goal, json).await?
        }
        Commands::Library { action } => handle_library(&service, action).await?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'browse' command
async fn handle_browse(service: &BookwormService, request: BrowseRequest, json: bool) -> Result<()> {
    let sort = request.sort;
    let page = service.browse(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} books found, sorted by {} (page {} of {})",
            page.total_count, sort, page.page, page.total_pages
        )
        .bold()
        .blue()
    );
    if page.results.is_empty() {
        println!("  No books found. Try adjusting your search or filters.");
    }
    print_books(&page.results, page_offset(page.page, page.page_size));
    Ok(())
}

/// Rank of the entry just before `page`; saturates for absurd page numbers
fn page_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Handle the 'recommend' command
async fn handle_recommend(service: &BookwormService, limit: usize, json: bool) -> Result<()> {
    let response = service.recommendations(Some(limit)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_recommendations(&response);
    Ok(())
}

/// Handle the 'stats' command
async fn handle_stats(service: &BookwormService, year: i32, goal: u32, json: bool) -> Result<()> {
    let summary = service.reading_summary(year, goal).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", format!("Reading stats for {}", year).bold().blue());
    println!("{}Want to Read: {}", "• ".green(), summary.shelves.want_to_read);
    println!(
        "{}Currently Reading: {}",
        "• ".green(),
        summary.shelves.currently_reading
    );
    println!("{}Read: {}", "• ".green(), summary.shelves.read);
    println!("{}Pages read: {}", "• ".cyan(), summary.pages_read);

    let progress = summary.goal;
    println!(
        "{}Goal: {} of {} books ({}% complete - {} books remaining)",
        "• ".cyan(),
        progress.books_read,
        progress.annual_goal,
        progress.rounded_percent(),
        progress.remaining
    );
    println!("  [{}]", progress_bar(progress.display_percent, 30));

    println!("Books finished per month:");
    for month in &summary.monthly {
        println!("  {} {:>2} {}", month.month, month.books, "█".repeat(month.books));
    }

    if !summary.weekly_pages.is_empty() {
        println!("Pages per week:");
        for week in &summary.weekly_pages {
            println!("  {:>3} {:>5}", week.week, week.pages);
        }
    }

    println!(
        "{}Avg. rating: {:.1} / 5",
        "• ".cyan(),
        summary.average_rating_read
    );
    if let Some(genre) = &summary.top_genre {
        println!("{}Favorite genre: {}", "• ".cyan(), genre);
    }

    if !summary.favorite_genres.is_empty() {
        println!("Genres you read:");
        for slice in &summary.favorite_genres {
            println!("  - {}: {}", slice.name, slice.value);
        }
    }
    Ok(())
}

/// Handle the 'library' command
async fn handle_library(service: &BookwormService, action: Option<LibraryAction>) -> Result<()> {
    match action.unwrap_or(LibraryAction::List { shelf: None }) {
        LibraryAction::List { shelf } => {
            let shelves: Vec<ShelfType> = match shelf {
                Some(shelf) => vec![shelf],
                None => ShelfType::ALL.to_vec(),
            };
            for shelf in shelves {
                let entries = service.library_entries(Some(shelf)).await;
                print_shelf(shelf, &entries);
            }
        }
        LibraryAction::Add { book_id, shelf } => {
            let item = service.add_to_shelf(&book_id, shelf).await?;
            println!("{} Added {} to {}", "✓".green(), item.book_id, shelf.label());
        }
        LibraryAction::Move { book_id, shelf } => {
            let item = service.move_to_shelf(&book_id, shelf).await?;
            println!("{} Moved {} to {}", "✓".green(), item.book_id, shelf.label());
        }
        LibraryAction::Remove { book_id } => {
            let item = service.remove_from_library(&book_id).await?;
            println!(
                "{} Removed {} from {}",
                "✓".green(),
                item.book_id,
                item.shelf_type.label()
            );
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    service: BookwormService,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        println!("Nothing to do: --requests must be at least 1");
        return Ok(());
    }

    // Build the random requests up front; ThreadRng cannot cross an await
    let genres = service.genres();
    let search_terms = ["the", "an", "dune", "man", "of", ""];
    let mut rng = rand::rng();
    let browse_requests: Vec<BrowseRequest> = (0..requests)
        .map(|_| {
            let mut request = BrowseRequest::new()
                .with_search(search_terms[rng.random_range(0..search_terms.len())])
                .with_min_rating(rng.random_range(0..=8) as f32 * 0.5)
                .with_sort(SortKey::ALL[rng.random_range(0..SortKey::ALL.len())])
                .with_page(rng.random_range(1..=3));
            if !genres.is_empty() && rng.random_bool(0.5) {
                request = request.with_genre(genres[rng.random_range(0..genres.len())].clone());
            }
            request
        })
        .collect();

    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    // Use tokio::spawn to make concurrent requests
    let mut handles = Vec::with_capacity(requests);
    for request in browse_requests {
        let service = service.clone();
        let permits = Arc::clone(&permits);
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            service.browse(request).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent.max(1));
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Nearest-rank percentile of an ascending, non-empty slice
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let index = ((sorted.len() as f64 * p) as usize).min(sorted.len().saturating_sub(1));
    sorted.get(index).copied().unwrap_or_default()
}

fn progress_bar(percent: f32, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f32).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

fn print_books(books: &[BookSummary], offset: usize) {
    for (i, book) in books.iter().enumerate() {
        let badge = book
            .shelf
            .map(|shelf| format!(" ({})", shelf.label()).yellow().to_string())
            .unwrap_or_default();
        println!(
            "{}. {} by {} [{}] - {} {:.1} ({} reviews, {} shelved){}",
            offset.saturating_add(i + 1).to_string().green(),
            book.title.bold(),
            book.author,
            book.genre,
            "★".yellow(),
            book.average_rating,
            book.review_count,
            book.added_to_shelves_count,
            badge
        );
    }
}

fn print_recommendations(response: &RecommendationResponse) {
    println!("{}", "Recommended For You".bold().blue());
    println!("{}", response.headline());
    print_books(&response.books, 0);
}

fn print_shelf(shelf: ShelfType, entries: &[LibraryEntry]) {
    println!(
        "{}",
        format!("{} ({})", shelf.label(), entries.len()).bold().blue()
    );
    for entry in entries {
        let title = entry
            .book
            .as_ref()
            .map(|book| format!("{} by {}", book.title, book.author))
            .unwrap_or_else(|| "(no longer in the catalog)".dimmed().to_string());
        let progress = entry
            .item
            .pages_read
            .map(|pages| format!(", {} pages in", pages))
            .unwrap_or_default();
        println!(
            "  - {} {} (added {}{})",
            entry.item.book_id.dimmed(),
            title,
            entry.item.added_date,
            progress
        );
    }
}
