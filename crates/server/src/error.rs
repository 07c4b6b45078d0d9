//! Errors raised by the service layer itself.
//!
//! Catalog and library failures arrive as `catalog::CatalogError` wrapped in
//! `anyhow` context; these are the cases the service detects on its own.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Book {0} is not in the catalog")]
    UnknownBook(String),
}
