//! Reading insights: the numbers behind the stats and home pages.
//!
//! Everything here is a pure aggregation over a catalog snapshot and one
//! reader's library:
//! - shelf and genre counts (pie and bar charts)
//! - books finished per month, pages per ISO week and pages read
//! - progress against an annual reading goal, average rating of read books
//!
//! [`ReadingSummary::build`] computes all of it for one year in a single call.

pub mod distribution;
pub mod goal;
pub mod timeline;

pub use distribution::{
    average_rating_read, genre_book_counts, genre_distribution, read_genre_distribution,
    shelf_counts, top_genre, GenreSlice, ShelfCounts,
};
pub use goal::{goal_progress, GoalProgress};
pub use timeline::{
    finished_in_year, monthly_finished, pages_read, weekly_pages, MonthlyCount, WeeklyPages,
    MONTH_LABELS,
};

use catalog::{Book, LibraryItem};
use serde::Serialize;
use tracing::debug;

/// One reader's year at a glance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSummary {
    pub year: i32,
    pub shelves: ShelfCounts,
    /// Read books finished during `year`
    pub books_read_this_year: usize,
    pub goal: GoalProgress,
    pub pages_read: u64,
    /// Genres of everything on the read shelf
    pub favorite_genres: Vec<GenreSlice>,
    /// Largest slice of `favorite_genres`
    pub top_genre: Option<String>,
    /// Mean rating of the read books, 0.0 with none
    pub average_rating_read: f32,
    pub monthly: [MonthlyCount; 12],
    /// Pages finished per ISO week of `year`
    pub weekly_pages: Vec<WeeklyPages>,
}

impl ReadingSummary {
    /// Summarize `items` against the catalog `books` for `year`.
    ///
    /// Counts follow the library alone: a read item whose book is missing
    /// from the catalog still counts toward the shelves, the months,
    /// `books_read_this_year` and the goal. Figures that need the book itself
    /// (`pages_read`, `favorite_genres`, `top_genre`, `average_rating_read`,
    /// `weekly_pages`) skip such items.
    ///
    /// There is no reading streak: the library keeps one finish date per
    /// book and no day-by-day progress log to count consecutive days from.
    pub fn build(books: &[Book], items: &[LibraryItem], year: i32, annual_goal: u32) -> Self {
        let monthly = monthly_finished(items, year);
        let books_read_this_year: usize = monthly.iter().map(|m| m.books).sum();
        let goal = goal_progress(
            annual_goal,
            u32::try_from(books_read_this_year).unwrap_or(u32::MAX),
        );

        let favorite_genres = read_genre_distribution(books, items);
        let top_genre = top_genre(&favorite_genres).map(|slice| slice.name.clone());

        let summary = Self {
            year,
            shelves: shelf_counts(items),
            books_read_this_year,
            goal,
            pages_read: pages_read(books, items),
            favorite_genres,
            top_genre,
            average_rating_read: average_rating_read(books, items),
            monthly,
            weekly_pages: weekly_pages(books, items, year),
        };

        debug!(
            year,
            read = summary.shelves.read,
            this_year = summary.books_read_this_year,
            "Built reading summary"
        );
        summary
    }

    /// The busiest month of the year, if anything was finished
    pub fn best_month(&self) -> Option<MonthlyCount> {
        self.monthly
            .iter()
            .copied()
            .filter(|m| m.books > 0)
            .fold(None, |best: Option<MonthlyCount>, m| match best {
                Some(b) if b.books >= m.books => Some(b),
                _ => Some(m),
            })
    }
}
