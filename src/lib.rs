//! LocalLibrary Catalog Server
//!
//! A Rust implementation of the LocalLibrary catalog: five record types
//! (genres, languages, authors, books, book copies) registered with an
//! admin site that exposes generic CRUD endpoints for each of them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod urls;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
