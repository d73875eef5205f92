//! Shelfmark Library Catalog
//!
//! A small Rust library-catalog server: book CRUD, search and sorting,
//! and a checkout/checkin history kept as an append-only event log from
//! which availability is derived on demand.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
