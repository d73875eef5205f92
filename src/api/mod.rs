//! API handlers for the Shelfmark HTTP surface

pub mod books;
pub mod circulation;
pub mod health;
pub mod openapi;
pub mod search;
