//! A reader's personal library.
//!
//! Invariant: at most one `LibraryItem` per book. Moving a book between
//! shelves rewrites the existing item instead of adding a second one.

use crate::error::{CatalogError, Result};
use crate::types::{BookId, LibraryItem, ShelfType};
use std::collections::HashSet;
use tracing::debug;

/// The reader's shelf entries, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    items: Vec<LibraryItem>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a library from items fetched from the library API.
    ///
    /// Fails on the first book that appears twice.
    pub fn from_items(items: Vec<LibraryItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.book_id.as_str()) {
                return Err(CatalogError::AlreadyInLibrary {
                    book_id: item.book_id.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, book_id: &str) -> Option<&LibraryItem> {
        self.items.iter().find(|item| item.book_id == book_id)
    }

    pub fn contains(&self, book_id: &str) -> bool {
        self.get(book_id).is_some()
    }

    /// Items currently on `shelf`
    pub fn on_shelf(&self, shelf: ShelfType) -> impl Iterator<Item = &LibraryItem> {
        self.items.iter().filter(move |item| item.shelf_type == shelf)
    }

    /// Put a book on a shelf for the first time.
    pub fn add(
        &mut self,
        book_id: impl Into<BookId>,
        shelf: ShelfType,
        added_date: impl Into<String>,
    ) -> Result<&LibraryItem> {
        let book_id = book_id.into();
        if self.contains(&book_id) {
            return Err(CatalogError::AlreadyInLibrary { book_id });
        }
        debug!("Adding {} to shelf {}", book_id, shelf);
        self.items
            .push(LibraryItem::new(book_id, shelf).with_added_date(added_date));
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Reclassify an existing item. The item keeps its position and dates.
    pub fn move_to_shelf(&mut self, book_id: &str, shelf: ShelfType) -> Result<&LibraryItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.book_id == book_id)
            .ok_or_else(|| CatalogError::NotInLibrary {
                book_id: book_id.to_string(),
            })?;
        debug!("Moving {} from {} to {}", book_id, item.shelf_type, shelf);
        item.shelf_type = shelf;
        Ok(item)
    }

    /// Record reading progress for a book already in the library
    pub fn update_progress(&mut self, book_id: &str, pages_read: u32) -> Result<&LibraryItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.book_id == book_id)
            .ok_or_else(|| CatalogError::NotInLibrary {
                book_id: book_id.to_string(),
            })?;
        item.pages_read = Some(pages_read);
        Ok(item)
    }

    /// Take a book out of the library entirely, returning its last state.
    pub fn remove(&mut self, book_id: &str) -> Result<LibraryItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.book_id == book_id)
            .ok_or_else(|| CatalogError::NotInLibrary {
                book_id: book_id.to_string(),
            })?;
        debug!("Removing {} from library", book_id);
        Ok(self.items.remove(position))
    }
}
