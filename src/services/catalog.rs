//! Catalog service: listing, search classification, availability filters

use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookWithStatus, CatalogCounts, CreateBook, SortField, SortOrder},
        event::CheckoutEvent,
        status::Availability,
    },
    repository::Repository,
};

/// Outcome of a catalog search, as the HTTP layer must act on it
#[derive(Debug)]
pub enum SearchOutcome {
    /// Empty query: back to the full listing
    FullListing,
    /// No match, numeric query: offer to add a book with that barcode
    AddWithBarcode(String),
    /// No match: full listing annotated with an error message
    NoMatches {
        books: Vec<BookWithStatus>,
        counts: CatalogCounts,
        message: String,
    },
    /// Single match: jump straight to that book's history page
    Single(i32),
    /// Several matches: the filtered subset with counts
    Many {
        books: Vec<BookWithStatus>,
        counts: CatalogCounts,
    },
}

/// Year predicate candidate: only a short numeric query (at most 4
/// characters) also matches on the publication year.
fn year_candidate(query: &str) -> Option<i32> {
    if query.len() > 4 {
        return None;
    }
    query.parse().ok()
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Sorted listing with catalog-wide availability counts
    pub async fn list_sorted(
        &self,
        sort: SortField,
        order: SortOrder,
    ) -> AppResult<(Vec<BookWithStatus>, CatalogCounts)> {
        let books = self.repository.books.list(sort, order).await?;
        self.with_statuses(books).await
    }

    /// Create a new book
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        let created = self.repository.books.create(&book).await?;
        tracing::info!(book_id = created.id, barcode = %created.barcode, "book created");
        Ok(created)
    }

    /// Delete a book and, by cascade, its event history
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }

    /// Classify a search query into the outcome the web layer acts on
    pub async fn search(&self, query: &str) -> AppResult<SearchOutcome> {
        if query.is_empty() {
            return Ok(SearchOutcome::FullListing);
        }

        let matches = self
            .repository
            .books
            .search(query, year_candidate(query))
            .await?;

        if matches.is_empty() {
            // A numeric query that matched nothing is taken for a barcode
            // worth adding to the catalog.
            if query.parse::<i64>().is_ok() {
                return Ok(SearchOutcome::AddWithBarcode(query.to_string()));
            }
            let all = self
                .repository
                .books
                .list(SortField::Title, SortOrder::Asc)
                .await?;
            let (books, counts) = self.with_statuses(all).await?;
            return Ok(SearchOutcome::NoMatches {
                books,
                counts,
                message: format!("No books found matching: {}", query),
            });
        }

        if matches.len() == 1 {
            return Ok(SearchOutcome::Single(matches[0].id));
        }

        let (books, counts) = self.with_statuses(matches).await?;
        Ok(SearchOutcome::Many { books, counts })
    }

    /// Case-insensitive exact-match author lookup
    pub async fn by_author(&self, name: &str) -> AppResult<Vec<Book>> {
        self.repository.books.find_by_author(name).await
    }

    /// `state == "checked out"` selects the checked-out books; any other
    /// value selects the complement.
    pub async fn by_availability(&self, state: &str) -> AppResult<Vec<BookWithStatus>> {
        let all = self
            .repository
            .books
            .list(SortField::Title, SortOrder::Asc)
            .await?;
        let (books, _) = self.with_statuses(all).await?;

        let want = if state == "checked out" {
            Availability::CheckedOut
        } else {
            Availability::Available
        };
        Ok(books.into_iter().filter(|b| b.status == want).collect())
    }

    /// Attach derived statuses: one event query for the whole set, grouped
    /// by book, each group run through the canonical derivation.
    async fn with_statuses(
        &self,
        books: Vec<Book>,
    ) -> AppResult<(Vec<BookWithStatus>, CatalogCounts)> {
        let events = self.repository.events.all().await?;
        let mut by_book: HashMap<i32, Vec<CheckoutEvent>> = HashMap::new();
        for event in events {
            by_book.entry(event.book_id).or_default().push(event);
        }

        let books: Vec<BookWithStatus> = books
            .into_iter()
            .map(|book| {
                let status = by_book
                    .get(&book.id)
                    .map(|events| Availability::derive(events))
                    .unwrap_or(Availability::Available);
                BookWithStatus { book, status }
            })
            .collect();

        let counts = CatalogCounts::tally(&books);
        Ok((books, counts))
    }
}
