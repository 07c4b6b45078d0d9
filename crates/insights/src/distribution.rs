//! Counts per shelf and per genre, shaped for charts.

use catalog::{Book, LibraryItem, ShelfType};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How many library items sit on each shelf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfCounts {
    pub want_to_read: usize,
    pub currently_reading: usize,
    pub read: usize,
}

impl ShelfCounts {
    pub fn get(&self, shelf: ShelfType) -> usize {
        match shelf {
            ShelfType::WantToRead => self.want_to_read,
            ShelfType::CurrentlyReading => self.currently_reading,
            ShelfType::Read => self.read,
        }
    }

    pub fn total(&self) -> usize {
        self.want_to_read + self.currently_reading + self.read
    }
}

/// One slice of a genre pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreSlice {
    pub name: String,
    pub value: usize,
}

pub fn shelf_counts(items: &[LibraryItem]) -> ShelfCounts {
    items.iter().fold(ShelfCounts::default(), |mut counts, item| {
        match item.shelf_type {
            ShelfType::WantToRead => counts.want_to_read += 1,
            ShelfType::CurrentlyReading => counts.currently_reading += 1,
            ShelfType::Read => counts.read += 1,
        }
        counts
    })
}

/// Books per genre, genres in the order they first appear.
pub fn genre_distribution<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<GenreSlice> {
    let mut slices: Vec<GenreSlice> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for book in books {
        match positions.get(book.genre.as_str()) {
            Some(&i) => slices[i].value += 1,
            None => {
                positions.insert(book.genre.as_str(), slices.len());
                slices.push(GenreSlice {
                    name: book.genre.clone(),
                    value: 1,
                });
            }
        }
    }

    slices
}

/// Genre distribution of the books on the `read` shelf.
///
/// Books are walked in catalog order; items whose book is not in the
/// catalog are ignored.
pub fn read_genre_distribution(books: &[Book], items: &[LibraryItem]) -> Vec<GenreSlice> {
    let read: HashSet<&str> = items
        .iter()
        .filter(|item| item.shelf_type == ShelfType::Read)
        .map(|item| item.book_id.as_str())
        .collect();

    genre_distribution(books.iter().filter(|book| read.contains(book.id.as_str())))
}

/// The largest slice; the earliest one wins a tie.
pub fn top_genre(slices: &[GenreSlice]) -> Option<&GenreSlice> {
    slices
        .iter()
        .fold(None, |best: Option<&GenreSlice>, slice| match best {
            Some(b) if b.value >= slice.value => Some(b),
            _ => Some(slice),
        })
}

/// Mean effective rating of the books on the `read` shelf.
///
/// Items whose book is not in the catalog are ignored; with nothing left
/// the mean is 0.0.
pub fn average_rating_read(books: &[Book], items: &[LibraryItem]) -> f32 {
    let read: HashSet<&str> = items
        .iter()
        .filter(|item| item.shelf_type == ShelfType::Read)
        .map(|item| item.book_id.as_str())
        .collect();

    let (sum, count) = books
        .iter()
        .filter(|book| read.contains(book.id.as_str()))
        .fold((0.0f32, 0u32), |(sum, count), book| (sum + book.rating(), count + 1));

    if count == 0 { 0.0 } else { sum / count as f32 }
}

/// Catalog size of each named genre, zero included, in the order given.
pub fn genre_book_counts<S: AsRef<str>>(genre_names: &[S], books: &[Book]) -> Vec<GenreSlice> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.genre.as_str()).or_insert(0) += 1;
    }

    genre_names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            GenreSlice {
                name: name.to_string(),
                value: counts.get(name).copied().unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_books() -> Vec<Book> {
        vec![
            Book::new("1", "Dune", "Frank Herbert", "Sci-Fi"),
            Book::new("2", "Emma", "Jane Austen", "Classics"),
            Book::new("3", "Foundation", "Isaac Asimov", "Sci-Fi"),
            Book::new("4", "Hamlet", "William Shakespeare", "Drama"),
        ]
    }

    #[test]
    fn test_shelf_counts() {
        let items = vec![
            LibraryItem::new("1", ShelfType::Read),
            LibraryItem::new("2", ShelfType::Read),
            LibraryItem::new("3", ShelfType::WantToRead),
        ];

        let counts = shelf_counts(&items);

        assert_eq!(counts.read, 2);
        assert_eq!(counts.want_to_read, 1);
        assert_eq!(counts.get(ShelfType::CurrentlyReading), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_genre_distribution_first_seen_order() {
        let books = create_test_books();

        let slices = genre_distribution(&books);

        let pairs: Vec<(&str, usize)> = slices.iter().map(|s| (s.name.as_str(), s.value)).collect();
        assert_eq!(pairs, vec![("Sci-Fi", 2), ("Classics", 1), ("Drama", 1)]);
    }

    #[test]
    fn test_read_genre_distribution() {
        let books = create_test_books();
        let items = vec![
            LibraryItem::new("4", ShelfType::Read),
            LibraryItem::new("3", ShelfType::Read),
            LibraryItem::new("2", ShelfType::CurrentlyReading),
            LibraryItem::new("gone", ShelfType::Read),
        ];

        let slices = read_genre_distribution(&books, &items);

        assert_eq!(
            slices,
            vec![
                GenreSlice { name: "Sci-Fi".into(), value: 1 },
                GenreSlice { name: "Drama".into(), value: 1 },
            ]
        );
    }

    #[test]
    fn test_top_genre_earliest_wins_tie() {
        let slices = vec![
            GenreSlice { name: "Drama".into(), value: 2 },
            GenreSlice { name: "Sci-Fi".into(), value: 3 },
            GenreSlice { name: "Classics".into(), value: 3 },
        ];

        assert_eq!(top_genre(&slices).map(|s| s.name.as_str()), Some("Sci-Fi"));
        assert_eq!(top_genre(&[]), None);
    }

    #[test]
    fn test_average_rating_read() {
        let books = vec![
            Book::new("1", "Dune", "Frank Herbert", "Sci-Fi").with_rating(4.5, 10),
            Book::new("2", "Emma", "Jane Austen", "Classics").with_rating(3.5, 10),
            Book::new("3", "Hamlet", "William Shakespeare", "Drama").with_rating(5.0, 10),
            Book::new("4", "Untitled", "Anonymous", "Drama"),
        ];
        let items = vec![
            LibraryItem::new("1", ShelfType::Read),
            LibraryItem::new("2", ShelfType::Read),
            LibraryItem::new("3", ShelfType::CurrentlyReading),
            LibraryItem::new("gone", ShelfType::Read),
        ];

        assert_eq!(average_rating_read(&books, &items), 4.0);

        let with_unrated = [items.clone(), vec![LibraryItem::new("4", ShelfType::Read)]].concat();
        assert!((average_rating_read(&books, &with_unrated) - 8.0 / 3.0).abs() < 1e-6);

        assert_eq!(average_rating_read(&books, &[]), 0.0);
    }

    #[test]
    fn test_genre_book_counts_include_zero() {
        let books = create_test_books();

        let counts = genre_book_counts(&["Drama", "Poetry", "Sci-Fi"], &books);

        let values: Vec<usize> = counts.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1, 0, 2]);
        assert_eq!(counts[1].name, "Poetry");
    }
}
