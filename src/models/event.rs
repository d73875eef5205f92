//! Checkout event model.
//!
//! Events are the only record of circulation: they are appended by the
//! checkout/checkin operations and never updated. Deleting a book removes
//! its events through the foreign-key cascade; no other deletion path exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Kind of circulation event. Stored as text in `checkout_events.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "VARCHAR", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Checkout,
    Checkin,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Checkout => "checkout",
            EventKind::Checkin => "checkin",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable checkout/checkin record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckoutEvent {
    pub id: i32,
    pub book_id: i32,
    pub kind: EventKind,
    pub occurred_at: DateTime<Utc>,
}
