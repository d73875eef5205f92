//! Circulation service: checkout/checkin over the event log.
//!
//! Recording is deliberately permissive: consecutive checkouts (or
//! checkins) of the same book are accepted and logged as-is. The derived
//! status simply reflects whatever the latest event says.

use crate::{
    error::AppResult,
    models::{
        book::BookHistory,
        event::{CheckoutEvent, EventKind},
        status::Availability,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a checkout for an existing book
    pub async fn checkout(&self, book_id: i32) -> AppResult<CheckoutEvent> {
        self.repository.books.get_by_id(book_id).await?;
        let event = self.repository.events.append(book_id, EventKind::Checkout).await?;
        tracing::info!(book_id, event_id = event.id, "checkout recorded");
        Ok(event)
    }

    /// Record a checkin for an existing book
    pub async fn checkin(&self, book_id: i32) -> AppResult<CheckoutEvent> {
        self.repository.books.get_by_id(book_id).await?;
        let event = self.repository.events.append(book_id, EventKind::Checkin).await?;
        tracing::info!(book_id, event_id = event.id, "checkin recorded");
        Ok(event)
    }

    /// Book detail with its descending event history and derived status
    pub async fn history(&self, book_id: i32) -> AppResult<BookHistory> {
        let book = self.repository.books.get_by_id(book_id).await?;
        let events = self.repository.events.history(book_id).await?;
        let status = Availability::derive(&events);
        Ok(BookHistory { book, status, events })
    }
}
