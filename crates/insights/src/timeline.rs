//! Reading activity over time.

use catalog::{Book, LibraryItem, ShelfType};
use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Books finished in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: &'static str,
    pub books: usize,
}

/// Pages finished during one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPages {
    /// `W1` .. `W53`
    pub week: String,
    pub pages: u64,
}

/// Read books per month of `year`, January first.
///
/// An item's month comes from its finish date, or its added date when it
/// has none. Items with neither date parseable are skipped.
pub fn monthly_finished(items: &[LibraryItem], year: i32) -> [MonthlyCount; 12] {
    let mut counts = MONTH_LABELS.map(|month| MonthlyCount { month, books: 0 });

    for date in items
        .iter()
        .filter(|item| item.shelf_type == ShelfType::Read)
        .filter_map(LibraryItem::finished_on)
        .filter(|date| date.year() == year)
    {
        counts[date.month0() as usize].books += 1;
    }

    counts
}

/// Read books finished in `year`
pub fn finished_in_year(items: &[LibraryItem], year: i32) -> usize {
    monthly_finished(items, year).iter().map(|m| m.books).sum()
}

/// Pages of the books finished in each ISO week of ISO year `year`.
///
/// A book counts in full in the week of its finish date (falling back to
/// the added date). Only weeks with pages appear, in week order. Items whose
/// book is not in the catalog are skipped.
pub fn weekly_pages(books: &[Book], items: &[LibraryItem], year: i32) -> Vec<WeeklyPages> {
    let pages: HashMap<&str, u32> = books
        .iter()
        .map(|book| (book.id.as_str(), book.total_pages))
        .collect();

    let mut weeks: BTreeMap<u32, u64> = BTreeMap::new();
    for item in items.iter().filter(|item| item.shelf_type == ShelfType::Read) {
        let (Some(date), Some(&book_pages)) =
            (item.finished_on(), pages.get(item.book_id.as_str()))
        else {
            continue;
        };
        let week = date.iso_week();
        if week.year() == year && book_pages > 0 {
            *weeks.entry(week.week()).or_insert(0) += book_pages as u64;
        }
    }

    weeks
        .into_iter()
        .map(|(week, pages)| WeeklyPages {
            week: format!("W{}", week),
            pages,
        })
        .collect()
}

/// Pages behind the reader so far.
///
/// Finished books count in full; books in progress count `pages_read`.
pub fn pages_read(books: &[Book], items: &[LibraryItem]) -> u64 {
    let pages: HashMap<&str, u32> = books
        .iter()
        .map(|book| (book.id.as_str(), book.total_pages))
        .collect();

    items
        .iter()
        .map(|item| match item.shelf_type {
            ShelfType::Read => pages.get(item.book_id.as_str()).copied().unwrap_or(0) as u64,
            ShelfType::CurrentlyReading => item.pages_read.unwrap_or(0) as u64,
            ShelfType::WantToRead => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_finished_uses_finish_date() {
        let items = vec![
            LibraryItem::new("1", ShelfType::Read)
                .with_added_date("2024-01-10")
                .with_finish_date("2024-02-03"),
            LibraryItem::new("2", ShelfType::Read).with_added_date("2024-02-28"),
            LibraryItem::new("3", ShelfType::Read).with_added_date("2024-12-31T23:00:00Z"),
            LibraryItem::new("4", ShelfType::Read).with_added_date("2023-02-01"),
            LibraryItem::new("5", ShelfType::CurrentlyReading).with_added_date("2024-02-01"),
            LibraryItem::new("6", ShelfType::Read).with_added_date("last tuesday"),
        ];

        let months = monthly_finished(&items, 2024);

        assert_eq!(months[0], MonthlyCount { month: "Jan", books: 0 });
        assert_eq!(months[1], MonthlyCount { month: "Feb", books: 2 });
        assert_eq!(months[11].books, 1);
        assert_eq!(finished_in_year(&items, 2024), 3);
        assert_eq!(finished_in_year(&items, 2023), 1);
    }

    #[test]
    fn test_monthly_labels() {
        let months = monthly_finished(&[], 2024);
        let labels: Vec<&str> = months.iter().map(|m| m.month).collect();
        assert_eq!(labels, MONTH_LABELS.to_vec());
        assert!(months.iter().all(|m| m.books == 0));
    }

    #[test]
    fn test_weekly_pages_by_iso_week() {
        let books = vec![
            Book::new("1", "Dune", "Frank Herbert", "Sci-Fi").with_pages(412),
            Book::new("2", "Emma", "Jane Austen", "Classics").with_pages(474),
            Book::new("3", "Hamlet", "William Shakespeare", "Drama").with_pages(104),
            Book::new("4", "Walden", "Henry David Thoreau", "Non-Fiction").with_pages(352),
        ];
        let items = vec![
            // Monday and Sunday of ISO week 6
            LibraryItem::new("1", ShelfType::Read).with_finish_date("2024-02-05"),
            LibraryItem::new("2", ShelfType::Read).with_finish_date("2024-02-11"),
            LibraryItem::new("3", ShelfType::Read).with_added_date("2024-01-02"),
            // 2021-01-01 is in ISO week 53 of 2020
            LibraryItem::new("4", ShelfType::Read).with_finish_date("2021-01-01"),
            LibraryItem::new("gone", ShelfType::Read).with_finish_date("2024-02-06"),
        ];

        let weeks = weekly_pages(&books, &items, 2024);

        assert_eq!(
            weeks,
            vec![
                WeeklyPages { week: "W1".into(), pages: 104 },
                WeeklyPages { week: "W6".into(), pages: 886 },
            ]
        );
        assert_eq!(
            weekly_pages(&books, &items, 2020),
            vec![WeeklyPages { week: "W53".into(), pages: 352 }]
        );
        assert!(weekly_pages(&books, &items, 2021).is_empty());
    }

    #[test]
    fn test_pages_read() {
        let books = vec![
            Book::new("1", "Dune", "Frank Herbert", "Sci-Fi").with_pages(412),
            Book::new("2", "Emma", "Jane Austen", "Classics").with_pages(474),
            Book::new("3", "Hamlet", "William Shakespeare", "Drama").with_pages(104),
        ];
        let items = vec![
            LibraryItem::new("1", ShelfType::Read),
            LibraryItem::new("2", ShelfType::CurrentlyReading).with_pages_read(120),
            LibraryItem::new("3", ShelfType::WantToRead),
            LibraryItem::new("gone", ShelfType::Read),
        ];

        assert_eq!(pages_read(&books, &items), 532);
    }
}
