//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::event::CheckoutEvent;
use super::status::Availability;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub barcode: String,
}

/// Fields of a book to be created. The barcode must be unique across the
/// catalog; creation fails with a conflict otherwise.
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub barcode: String,
}

/// Book together with its derived availability, for list views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookWithStatus {
    #[serde(flatten)]
    pub book: Book,
    pub status: Availability,
}

/// Book detail view: the record, its derived status, and the full event
/// history, most recent first.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookHistory {
    pub book: Book,
    pub status: Availability,
    pub events: Vec<CheckoutEvent>,
}

/// Aggregate availability counts over a set of books
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CatalogCounts {
    pub total: usize,
    pub checked_out: usize,
    pub available: usize,
}

impl CatalogCounts {
    pub fn tally(books: &[BookWithStatus]) -> Self {
        let checked_out = books
            .iter()
            .filter(|b| b.status == Availability::CheckedOut)
            .count();
        Self {
            total: books.len(),
            checked_out,
            available: books.len() - checked_out,
        }
    }
}

/// Sortable listing columns. Unrecognized values fall back to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Author,
    Year,
    Genre,
    Barcode,
}

impl SortField {
    /// Column name for ORDER BY. Values are whitelisted here; never
    /// interpolate user input directly.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Year => "year",
            SortField::Genre => "genre",
            SortField::Barcode => "barcode",
        }
    }
}

impl From<&str> for SortField {
    fn from(s: &str) -> Self {
        match s {
            "author" => SortField::Author,
            "year" => SortField::Year,
            "genre" => SortField::Genre,
            "barcode" => SortField::Barcode,
            _ => SortField::Title,
        }
    }
}

/// Listing sort direction. Anything other than `desc` sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}
