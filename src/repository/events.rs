//! Checkout event repository.
//!
//! The event log is append-only: this module has no UPDATE or DELETE
//! statements. Events disappear only when their book is deleted and the
//! foreign-key cascade removes them.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::event::{CheckoutEvent, EventKind},
};

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Append an event stamped by the database clock
    pub async fn append(&self, book_id: i32, kind: EventKind) -> AppResult<CheckoutEvent> {
        Ok(sqlx::query_as::<_, CheckoutEvent>(
            "INSERT INTO checkout_events (book_id, kind) VALUES ($1, $2) \
             RETURNING id, book_id, kind, occurred_at",
        )
        .bind(book_id)
        .bind(kind)
        .fetch_one(&self.pool)
        .await?)
    }

    /// All events for one book, most recent first
    pub async fn history(&self, book_id: i32) -> AppResult<Vec<CheckoutEvent>> {
        Ok(sqlx::query_as::<_, CheckoutEvent>(
            "SELECT id, book_id, kind, occurred_at FROM checkout_events \
             WHERE book_id = $1 ORDER BY occurred_at DESC, id DESC",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Every event in the store, for deriving statuses across the catalog
    /// in a single query
    pub async fn all(&self) -> AppResult<Vec<CheckoutEvent>> {
        Ok(sqlx::query_as::<_, CheckoutEvent>(
            "SELECT id, book_id, kind, occurred_at FROM checkout_events \
             ORDER BY book_id, occurred_at, id",
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
